/// Serialization applied to a thumbnail's pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbnailEncoding {
    /// Binary portable pixmap: a `P6` text header followed by raw RGB rows.
    Ppm,
    /// PNG, for callers that want a compressed, widely readable file.
    Png,
    /// Tightly packed RGB24 bytes with no header.
    RawRgb,
}

impl ThumbnailEncoding {
    /// Conventional file extension for the encoding.
    pub fn extension(self) -> &'static str {
        match self {
            ThumbnailEncoding::Ppm => "ppm",
            ThumbnailEncoding::Png => "png",
            ThumbnailEncoding::RawRgb => "rgb",
        }
    }
}

/// Final artifact of a pipeline run: encoded bytes plus the dimensions of
/// the frame they were produced from.
#[derive(Clone, Debug)]
pub struct Thumbnail {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub encoding: ThumbnailEncoding,
}
