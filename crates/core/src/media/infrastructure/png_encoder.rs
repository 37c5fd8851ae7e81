use std::io::Cursor;

use crate::error::ExtractError;
use crate::media::domain::thumbnail_encoder::ThumbnailEncoder;
use crate::shared::rgb_frame::RgbFrame;
use crate::shared::thumbnail::{Thumbnail, ThumbnailEncoding};

/// Encodes frames as PNG via the `image` crate, for callers that want a
/// compressed, widely readable file instead of raw pixels.
pub struct PngEncoder;

impl PngEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailEncoder for PngEncoder {
    fn encode(&self, frame: &RgbFrame) -> Result<Thumbnail, ExtractError> {
        let img =
            image::RgbImage::from_raw(frame.width(), frame.height(), frame.tight_pixels())
                .ok_or(ExtractError::AllocationFailed {
                    what: "RGB image buffer",
                })?;

        let mut data = Vec::new();
        img.write_to(&mut Cursor::new(&mut data), image::ImageFormat::Png)
            .map_err(|_| ExtractError::AllocationFailed {
                what: "PNG output buffer",
            })?;

        Ok(Thumbnail {
            data,
            width: frame.width(),
            height: frame.height(),
            encoding: ThumbnailEncoding::Png,
        })
    }
}
