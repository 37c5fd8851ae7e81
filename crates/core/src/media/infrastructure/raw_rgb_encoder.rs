use crate::error::ExtractError;
use crate::media::domain::thumbnail_encoder::ThumbnailEncoder;
use crate::shared::rgb_frame::RgbFrame;
use crate::shared::thumbnail::{Thumbnail, ThumbnailEncoding};

/// Hands the pixels over as tightly packed RGB24 bytes with no header,
/// for callers that want structured binary data instead of a file-like
/// blob.
pub struct RawRgbEncoder;

impl RawRgbEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RawRgbEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailEncoder for RawRgbEncoder {
    fn encode(&self, frame: &RgbFrame) -> Result<Thumbnail, ExtractError> {
        Ok(Thumbnail {
            data: frame.tight_pixels(),
            width: frame.width(),
            height: frame.height(),
            encoding: ThumbnailEncoding::RawRgb,
        })
    }
}
