use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds of the thumbnail pipeline.
///
/// Every variant is terminal for the invocation that produced it: nothing
/// is retried internally, and no partial result accompanies an error.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not open {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read stream information from {path}: {source}")]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("no video stream in container")]
    NoVideoStream,
    #[error("no decoder available for codec {codec}")]
    DecoderNotFound { codec: String },
    #[error("could not open codec {codec}: {source}")]
    CodecOpenFailed {
        codec: String,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("could not create {pixel_format} -> RGB24 conversion context for {width}x{height}: {source}")]
    ConversionContextFailed {
        pixel_format: String,
        width: u32,
        height: u32,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("end of stream before any frame was decoded")]
    NoFrameDecoded,
    #[error("decoding failed: {0}")]
    Decode(#[source] ffmpeg_next::Error),
    #[error("could not allocate {what}")]
    AllocationFailed { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_failed_names_the_path() {
        let err = ExtractError::OpenFailed {
            path: PathBuf::from("/tmp/missing.mp4"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/tmp/missing.mp4"));
    }

    #[test]
    fn test_decoder_not_found_names_the_codec() {
        let err = ExtractError::DecoderNotFound {
            codec: "av1".to_string(),
        };
        assert_eq!(err.to_string(), "no decoder available for codec av1");
    }

    #[test]
    fn test_conversion_context_failed_names_the_geometry() {
        let err = ExtractError::ConversionContextFailed {
            pixel_format: "YUV420P".to_string(),
            width: 640,
            height: 480,
            source: ffmpeg_next::Error::InvalidData,
        };
        let message = err.to_string();
        assert!(message.contains("YUV420P"));
        assert!(message.contains("640x480"));
    }
}
