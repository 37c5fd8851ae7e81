use std::path::Path;

use crate::error::ExtractError;
use crate::shared::media_info::MediaInfo;
use crate::shared::rgb_frame::RgbFrame;

/// Produces packed RGB frames from a media source.
///
/// Implementations own the container, decoder, and conversion state; the
/// orchestration layer only sees [`MediaInfo`] and [`RgbFrame`].
pub trait FrameSource: Send {
    /// Opens the source, selects its video stream, and returns metadata.
    fn open(&mut self, path: &Path) -> Result<MediaInfo, ExtractError>;

    /// Decodes and converts the next frame.
    ///
    /// Returns `Ok(None)` once the container is exhausted and the decoder
    /// has been drained. A source that was never opened produces no frames.
    fn next_frame(&mut self) -> Result<Option<RgbFrame>, ExtractError>;

    /// Releases decoder and container resources, in that order.
    ///
    /// Safe to call more than once and from any error path.
    fn close(&mut self);
}
