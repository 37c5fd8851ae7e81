use crate::error::ExtractError;

use super::media_source::MediaSource;

/// Decode state bound to one video stream: the opened codec plus the
/// corrected stream time base.
///
/// Must not outlive the [`MediaSource`] whose stream it decodes; the
/// composing source drops the session first.
pub struct DecoderSession {
    decoder: ffmpeg_next::decoder::Video,
    stream_index: usize,
    time_base: ffmpeg_next::Rational,
}

impl DecoderSession {
    /// Looks up and opens a decoder for the stream at `stream_index`.
    ///
    /// When no decoder is registered for the stream's codec this fails
    /// with `DecoderNotFound` before any open is attempted; an open that
    /// fails afterwards is `CodecOpenFailed`.
    pub fn open(source: &MediaSource, stream_index: usize) -> Result<Self, ExtractError> {
        let stream = source
            .input()
            .stream(stream_index)
            .ok_or(ExtractError::NoVideoStream)?;

        let parameters = stream.parameters();
        let codec_id = parameters.id();
        let codec =
            ffmpeg_next::decoder::find(codec_id).ok_or_else(|| ExtractError::DecoderNotFound {
                codec: format!("{codec_id:?}").to_lowercase(),
            })?;
        let name = codec.name().to_string();

        let context = ffmpeg_next::codec::context::Context::from_parameters(parameters)
            .map_err(|e| ExtractError::CodecOpenFailed {
                codec: name.clone(),
                source: e,
            })?;
        let decoder = context
            .decoder()
            .open_as(codec)
            .and_then(|opened| opened.video())
            .map_err(|e| ExtractError::CodecOpenFailed {
                codec: name,
                source: e,
            })?;

        Ok(Self {
            decoder,
            stream_index,
            time_base: corrected_time_base(stream.time_base()),
        })
    }

    pub fn stream_index(&self) -> usize {
        self.stream_index
    }

    pub fn time_base(&self) -> ffmpeg_next::Rational {
        self.time_base
    }

    pub fn codec_name(&self) -> String {
        self.decoder
            .codec()
            .map(|c| c.name().to_string())
            .unwrap_or_default()
    }

    pub fn width(&self) -> u32 {
        self.decoder.width()
    }

    pub fn height(&self) -> u32 {
        self.decoder.height()
    }

    pub(crate) fn decoder_mut(&mut self) -> &mut ffmpeg_next::decoder::Video {
        &mut self.decoder
    }
}

/// Some encoders historically emitted millisecond-scale time bases with a
/// literal denominator of 1, which would misread as whole-second units.
/// Treat the denominator as 1000 in exactly that case; every other time
/// base passes through untouched.
pub fn corrected_time_base(reported: ffmpeg_next::Rational) -> ffmpeg_next::Rational {
    if reported.numerator() > 1000 && reported.denominator() == 1 {
        ffmpeg_next::Rational(reported.numerator(), 1000)
    } else {
        reported
    }
}
