use std::path::Path;

use crate::error::ExtractError;
use crate::media::domain::frame_source::FrameSource;
use crate::media::domain::thumbnail_encoder::ThumbnailEncoder;
use crate::shared::thumbnail::Thumbnail;

/// How many frames to capture, and the caller's seek hint.
///
/// `frame_count` makes the capture bound explicit: the historical
/// extractor saved the first two decoded frames because of an off-by-one
/// bound check. Callers that want that behavior pass 2; the default is a
/// single frame.
#[derive(Clone, Debug)]
pub struct ExtractOptions {
    /// Number of leading frames to convert and encode.
    pub frame_count: usize,
    /// Seek hint in seconds. Accepted for interface compatibility but not
    /// consulted: decoding always starts at the beginning of the stream.
    pub position: Option<f64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            frame_count: 1,
            position: None,
        }
    }
}

/// Orchestrates one pipeline run: open, stream selection, decode,
/// conversion, and encoding.
///
/// The first failing step aborts the run, and the source is closed on
/// every exit path, so no container or decoder handle outlives an
/// invocation. An error is never accompanied by partial output.
pub struct ExtractThumbnailUseCase {
    source: Box<dyn FrameSource>,
    encoder: Box<dyn ThumbnailEncoder>,
}

impl ExtractThumbnailUseCase {
    pub fn new(source: Box<dyn FrameSource>, encoder: Box<dyn ThumbnailEncoder>) -> Self {
        Self { source, encoder }
    }

    /// Runs the pipeline and returns the captured thumbnails in decode
    /// order: at most `options.frame_count`, fewer when the stream ends
    /// first, and `NoFrameDecoded` when it ends before the first frame.
    pub fn execute(
        &mut self,
        path: &Path,
        options: &ExtractOptions,
    ) -> Result<Vec<Thumbnail>, ExtractError> {
        let result = self.run(path, options);
        self.source.close();
        result
    }

    fn run(
        &mut self,
        path: &Path,
        options: &ExtractOptions,
    ) -> Result<Vec<Thumbnail>, ExtractError> {
        if options.frame_count == 0 {
            return Ok(Vec::new());
        }
        if let Some(position) = options.position {
            // Carried through from the caller but never consulted; see
            // ExtractOptions::position.
            log::debug!("ignoring seek hint of {position}s");
        }

        let info = self.source.open(path)?;

        let mut thumbnails = Vec::with_capacity(options.frame_count);
        while thumbnails.len() < options.frame_count {
            let Some(frame) = self.source.next_frame()? else {
                break;
            };
            thumbnails.push(self.encoder.encode(&frame)?);
        }

        if thumbnails.is_empty() {
            return Err(ExtractError::NoFrameDecoded);
        }

        log::info!(
            "captured {} of {} requested frame(s) from {}x{} video",
            thumbnails.len(),
            options.frame_count,
            info.width,
            info.height
        );
        Ok(thumbnails)
    }
}
