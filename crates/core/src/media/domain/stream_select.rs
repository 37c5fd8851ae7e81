use crate::shared::stream_descriptor::{MediaKind, StreamDescriptor};

/// Picks the stream to decode: the first video stream in container order.
///
/// When several video streams exist, the lowest index wins. There is no
/// scoring of resolutions, dispositions, or default flags.
pub fn first_video(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
    streams.iter().find(|s| s.kind == MediaKind::Video)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(index: usize, kind: MediaKind) -> StreamDescriptor {
        StreamDescriptor {
            index,
            kind,
            codec: String::new(),
            width: 0,
            height: 0,
            time_base: (1, 1000),
        }
    }

    #[test]
    fn test_first_video_wins_over_later_ones() {
        let streams = vec![
            descriptor(0, MediaKind::Audio),
            descriptor(1, MediaKind::Video),
            descriptor(2, MediaKind::Video),
        ];
        assert_eq!(first_video(&streams).map(|s| s.index), Some(1));
    }

    #[test]
    fn test_container_order_decides_not_stream_properties() {
        let mut low_res = descriptor(1, MediaKind::Video);
        low_res.width = 320;
        low_res.height = 240;
        let mut high_res = descriptor(2, MediaKind::Video);
        high_res.width = 1920;
        high_res.height = 1080;

        let streams = vec![descriptor(0, MediaKind::Subtitle), low_res, high_res];
        assert_eq!(first_video(&streams).map(|s| s.index), Some(1));
    }

    #[test]
    fn test_no_video_stream_yields_none() {
        let streams = vec![
            descriptor(0, MediaKind::Audio),
            descriptor(1, MediaKind::Data),
        ];
        assert!(first_video(&streams).is_none());
    }

    #[test]
    fn test_empty_container_yields_none() {
        assert!(first_video(&[]).is_none());
    }
}
