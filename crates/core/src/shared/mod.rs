pub mod media_info;
pub mod rgb_frame;
pub mod stream_descriptor;
pub mod thumbnail;
