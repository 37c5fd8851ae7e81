//! Video thumbnail extraction: demux a container, decode its first video
//! stream, convert frames to packed RGB24, and serialize them as simple
//! images.
//!
//! The crate is layered the same way throughout: `shared` holds plain data
//! types, `media::domain` the ports and pure selection logic,
//! `media::infrastructure` the ffmpeg-backed adapters and output encoders,
//! and `extraction` the use case that orchestrates one run.

pub mod error;
pub mod extraction;
pub mod media;
pub mod shared;
