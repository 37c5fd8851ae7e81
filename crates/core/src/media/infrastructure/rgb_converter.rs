use crate::error::ExtractError;
use crate::shared::rgb_frame::RgbFrame;

type RawFrame = ffmpeg_next::util::frame::video::Video;

/// Converts decoded frames from their native pixel format to packed RGB24
/// at unchanged dimensions.
///
/// The swscale context is the expensive part, so one is built per
/// (pixel format, width, height) combination and reused for subsequent
/// frames; it is rebuilt only when the source geometry changes. The
/// context lives on this instance and never outlives one pipeline run.
pub struct RgbConverter {
    context: Option<ffmpeg_next::software::scaling::Context>,
    source_format: ffmpeg_next::format::Pixel,
    width: u32,
    height: u32,
}

impl RgbConverter {
    pub fn new() -> Self {
        Self {
            context: None,
            source_format: ffmpeg_next::format::Pixel::None,
            width: 0,
            height: 0,
        }
    }

    pub fn convert(&mut self, frame: &RawFrame) -> Result<RgbFrame, ExtractError> {
        let format = frame.format();
        let width = frame.width();
        let height = frame.height();

        let scaler = self.context_for(format, width, height)?;

        let mut rgb = RawFrame::empty();
        scaler.run(frame, &mut rgb).map_err(ExtractError::Decode)?;

        if rgb.planes() == 0 {
            return Err(ExtractError::AllocationFailed {
                what: "RGB24 frame buffer",
            });
        }

        let stride = rgb.stride(0);
        Ok(RgbFrame::new(rgb.data(0).to_vec(), width, height, stride))
    }

    fn context_for(
        &mut self,
        format: ffmpeg_next::format::Pixel,
        width: u32,
        height: u32,
    ) -> Result<&mut ffmpeg_next::software::scaling::Context, ExtractError> {
        let stale = self.context.is_none()
            || self.source_format != format
            || self.width != width
            || self.height != height;

        if stale {
            let context = ffmpeg_next::software::scaling::Context::get(
                format,
                width,
                height,
                ffmpeg_next::format::Pixel::RGB24,
                width,
                height,
                ffmpeg_next::software::scaling::Flags::BICUBIC,
            )
            .map_err(|e| ExtractError::ConversionContextFailed {
                pixel_format: format!("{format:?}"),
                width,
                height,
                source: e,
            })?;
            self.context = Some(context);
            self.source_format = format;
            self.width = width;
            self.height = height;
        }

        // The branch above leaves a context in place on every Ok path.
        self.context.as_mut().ok_or(ExtractError::AllocationFailed {
            what: "conversion context",
        })
    }
}

impl Default for RgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yuv_frame(width: u32, height: u32, luma: u8) -> RawFrame {
        let mut frame = RawFrame::new(ffmpeg_next::format::Pixel::YUV420P, width, height);
        let stride = frame.stride(0);
        let data = frame.data_mut(0);
        for row in 0..height as usize {
            for col in 0..width as usize {
                data[row * stride + col] = luma;
            }
        }
        // Neutral chroma so the result stays gray.
        for plane in 1..3 {
            let value = 128u8;
            for byte in frame.data_mut(plane) {
                *byte = value;
            }
        }
        frame
    }

    #[test]
    fn test_converts_yuv_to_rgb_at_same_dimensions() {
        ffmpeg_next::init().unwrap();

        let mut converter = RgbConverter::new();
        let rgb = converter.convert(&yuv_frame(64, 48, 235)).unwrap();

        assert_eq!(rgb.width(), 64);
        assert_eq!(rgb.height(), 48);
        assert!(rgb.stride() >= 64 * 3);
        assert_eq!(rgb.tight_pixels().len(), 64 * 48 * 3);

        // Full-scale luma with neutral chroma lands near white.
        let pixels = rgb.tight_pixels();
        assert!(pixels[0] > 220);
        assert!(pixels[1] > 220);
        assert!(pixels[2] > 220);
    }

    #[test]
    fn test_context_is_reused_across_same_geometry() {
        ffmpeg_next::init().unwrap();

        let mut converter = RgbConverter::new();
        let first = converter.convert(&yuv_frame(32, 32, 100)).unwrap();
        let second = converter.convert(&yuv_frame(32, 32, 100)).unwrap();
        assert_eq!(first.tight_pixels(), second.tight_pixels());
    }

    #[test]
    fn test_geometry_change_rebuilds_the_context() {
        ffmpeg_next::init().unwrap();

        let mut converter = RgbConverter::new();
        let small = converter.convert(&yuv_frame(32, 32, 100)).unwrap();
        let large = converter.convert(&yuv_frame(64, 32, 100)).unwrap();
        assert_eq!(small.width(), 32);
        assert_eq!(large.width(), 64);
    }
}
