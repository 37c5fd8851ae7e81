use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::shared::stream_descriptor::{MediaKind, StreamDescriptor};

/// An open media container: the demuxer handle plus its parsed stream
/// headers.
///
/// Packets are pulled from the wrapped input context by the frame pump.
/// Dropping the source closes the underlying file handle, so no exit path
/// can leak it.
pub struct MediaSource {
    input: ffmpeg_next::format::context::Input,
    path: PathBuf,
}

impl std::fmt::Debug for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaSource")
            .field("path", &self.path)
            .finish()
    }
}

impl MediaSource {
    /// Opens a container and probes its stream headers.
    ///
    /// An unreadable file is `OpenFailed`; a readable file whose headers
    /// cannot be parsed is `ProbeFailed`.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        ffmpeg_next::init().map_err(|e| ExtractError::ProbeFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        // format::input fuses avformat_open_input with the stream-info
        // probe, so plain I/O failures are separated out first.
        std::fs::metadata(path).map_err(|e| ExtractError::OpenFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let input =
            ffmpeg_next::format::input(&path).map_err(|e| ExtractError::ProbeFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        log::debug!(
            "opened {}: format {}, {} stream(s)",
            path.display(),
            input.format().name(),
            input.streams().count()
        );

        Ok(Self {
            input,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only descriptors for every stream, in container order.
    pub fn descriptors(&self) -> Vec<StreamDescriptor> {
        self.input
            .streams()
            .map(|stream| {
                let parameters = stream.parameters();
                let time_base = stream.time_base();
                let (width, height) = coded_size(&parameters);
                StreamDescriptor {
                    index: stream.index(),
                    kind: media_kind(parameters.medium()),
                    codec: codec_name(parameters.id()),
                    width,
                    height,
                    time_base: (time_base.numerator(), time_base.denominator()),
                }
            })
            .collect()
    }

    pub(crate) fn input(&self) -> &ffmpeg_next::format::context::Input {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut ffmpeg_next::format::context::Input {
        &mut self.input
    }
}

fn media_kind(medium: ffmpeg_next::media::Type) -> MediaKind {
    use ffmpeg_next::media::Type;
    match medium {
        Type::Video => MediaKind::Video,
        Type::Audio => MediaKind::Audio,
        Type::Subtitle => MediaKind::Subtitle,
        Type::Data | Type::Attachment => MediaKind::Data,
        _ => MediaKind::Other,
    }
}

/// Codec short name, falling back to the id's debug form for codecs
/// without a registered decoder.
fn codec_name(id: ffmpeg_next::codec::Id) -> String {
    ffmpeg_next::decoder::find(id)
        .map(|codec| codec.name().to_string())
        .unwrap_or_else(|| format!("{id:?}").to_lowercase())
}

fn coded_size(parameters: &ffmpeg_next::codec::Parameters) -> (u32, u32) {
    // The safe Parameters wrapper does not expose the coded dimensions;
    // the pointer stays valid for the borrow and is only read.
    unsafe {
        let raw = parameters.as_ptr();
        ((*raw).width.max(0) as u32, (*raw).height.max(0) as u32)
    }
}
