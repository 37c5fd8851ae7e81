pub mod extract_thumbnail_use_case;
