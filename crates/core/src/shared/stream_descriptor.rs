/// Broad classification of a container stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Other,
}

/// Read-only view of one stream inside an open container.
///
/// Captured once from the demuxed headers; never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamDescriptor {
    /// Position of the stream in container order.
    pub index: usize,
    pub kind: MediaKind,
    /// Codec short name as reported by the demuxer, e.g. "h264".
    pub codec: String,
    /// Coded frame width; 0 for non-video streams.
    pub width: u32,
    /// Coded frame height; 0 for non-video streams.
    pub height: u32,
    /// Stream time base as (numerator, denominator).
    pub time_base: (i32, i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let descriptor = StreamDescriptor {
            index: 2,
            kind: MediaKind::Video,
            codec: "mpeg4".to_string(),
            width: 640,
            height: 480,
            time_base: (1, 25),
        };
        assert_eq!(descriptor.index, 2);
        assert_eq!(descriptor.kind, MediaKind::Video);
        assert_eq!(descriptor.codec, "mpeg4");
        assert_eq!(descriptor.time_base, (1, 25));
    }

    #[test]
    fn test_audio_stream_has_no_dimensions() {
        let descriptor = StreamDescriptor {
            index: 0,
            kind: MediaKind::Audio,
            codec: "aac".to_string(),
            width: 0,
            height: 0,
            time_base: (1, 44100),
        };
        assert_eq!(descriptor.width, 0);
        assert_eq!(descriptor.height, 0);
    }
}
