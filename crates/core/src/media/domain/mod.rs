pub mod frame_source;
pub mod stream_select;
pub mod thumbnail_encoder;
