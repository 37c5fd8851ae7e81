use std::path::PathBuf;

/// Summary of an opened media source, as reported by the container headers
/// and the opened decoder.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    /// Stream time base after frame-rate correction, as
    /// (numerator, denominator).
    pub time_base: (i32, i32),
    pub source_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let info = MediaInfo {
            width: 1920,
            height: 1080,
            fps: 30.0,
            total_frames: 900,
            codec: "h264".to_string(),
            time_base: (1, 90000),
            source_path: Some(PathBuf::from("/tmp/test.mp4")),
        };
        assert_eq!(info.width, 1920);
        assert_eq!(info.height, 1080);
        assert_eq!(info.fps, 30.0);
        assert_eq!(info.total_frames, 900);
        assert_eq!(info.codec, "h264");
        assert_eq!(info.time_base, (1, 90000));
        assert_eq!(info.source_path, Some(PathBuf::from("/tmp/test.mp4")));
    }

    #[test]
    fn test_clone_is_independent() {
        let info = MediaInfo {
            width: 640,
            height: 480,
            fps: 24.0,
            total_frames: 100,
            codec: "vp9".to_string(),
            time_base: (1, 1000),
            source_path: None,
        };
        let cloned = info.clone();
        assert_eq!(info, cloned);
    }
}
