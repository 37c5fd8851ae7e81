use std::path::Path;

use crate::error::ExtractError;
use crate::media::domain::frame_source::FrameSource;
use crate::media::domain::stream_select;
use crate::shared::media_info::MediaInfo;
use crate::shared::rgb_frame::RgbFrame;

use super::decoder_session::DecoderSession;
use super::frame_pump::FramePump;
use super::media_source::MediaSource;
use super::rgb_converter::RgbConverter;

/// Decodes video frames via ffmpeg-next (libavformat + libavcodec) and
/// converts each one to packed RGB24.
pub struct FfmpegFrameSource {
    // The session must be released before the source that owns its stream;
    // close() and the field order both keep that ordering.
    session: Option<DecoderSession>,
    source: Option<MediaSource>,
    pump: FramePump,
    converter: RgbConverter,
}

// Safety: FfmpegFrameSource is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegFrameSource {}

impl FfmpegFrameSource {
    pub fn new() -> Self {
        Self {
            session: None,
            source: None,
            pump: FramePump::new(),
            converter: RgbConverter::new(),
        }
    }
}

impl Default for FfmpegFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for FfmpegFrameSource {
    fn open(&mut self, path: &Path) -> Result<MediaInfo, ExtractError> {
        let source = MediaSource::open(path)?;

        let descriptors = source.descriptors();
        let selected =
            stream_select::first_video(&descriptors).ok_or(ExtractError::NoVideoStream)?;
        let stream_index = selected.index;

        let session = DecoderSession::open(&source, stream_index)?;

        let (fps, total_frames) = source
            .input()
            .stream(stream_index)
            .map(|stream| {
                let rate = stream.rate();
                let fps = if rate.denominator() != 0 {
                    rate.numerator() as f64 / rate.denominator() as f64
                } else {
                    0.0
                };
                (fps, stream.frames().max(0) as usize)
            })
            .unwrap_or((0.0, 0));

        let time_base = session.time_base();
        let info = MediaInfo {
            width: session.width(),
            height: session.height(),
            fps,
            total_frames,
            codec: session.codec_name(),
            time_base: (time_base.numerator(), time_base.denominator()),
            source_path: Some(path.to_path_buf()),
        };

        log::info!(
            "video stream {}: {} {}x{} at {:.2} fps",
            stream_index,
            info.codec,
            info.width,
            info.height,
            info.fps
        );

        self.session = Some(session);
        self.source = Some(source);
        self.pump = FramePump::new();
        self.converter = RgbConverter::new();

        Ok(info)
    }

    fn next_frame(&mut self) -> Result<Option<RgbFrame>, ExtractError> {
        let (Some(source), Some(session)) = (self.source.as_mut(), self.session.as_mut())
        else {
            // Never opened (or already closed): nothing left to produce.
            return Ok(None);
        };

        let Some(raw) = self.pump.next_frame(source, session)? else {
            return Ok(None);
        };

        let rgb = self.converter.convert(&raw)?;
        Ok(Some(rgb))
    }

    fn close(&mut self) {
        self.session = None;
        self.source = None;
    }
}
