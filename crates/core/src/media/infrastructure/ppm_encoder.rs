use crate::error::ExtractError;
use crate::media::domain::thumbnail_encoder::ThumbnailEncoder;
use crate::shared::rgb_frame::RgbFrame;
use crate::shared::thumbnail::{Thumbnail, ThumbnailEncoding};

/// Serializes frames as binary PPM (`P6`): a self-describing uncompressed
/// image that needs no external codec.
pub struct PpmEncoder;

impl PpmEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PpmEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailEncoder for PpmEncoder {
    fn encode(&self, frame: &RgbFrame) -> Result<Thumbnail, ExtractError> {
        let header = format!("P6\n{} {}\n255\n", frame.width(), frame.height());
        let row_len = frame.width() as usize * 3;

        let mut data =
            Vec::with_capacity(header.len() + row_len * frame.height() as usize);
        data.extend_from_slice(header.as_bytes());
        // Each row contributes exactly width*3 bytes; stride padding never
        // reaches the output.
        for row in frame.rows() {
            data.extend_from_slice(row);
        }

        Ok(Thumbnail {
            data,
            width: frame.width(),
            height: frame.height(),
            encoding: ThumbnailEncoding::Ppm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32, value: u8) -> RgbFrame {
        RgbFrame::new(
            vec![value; (width * height * 3) as usize],
            width,
            height,
            width as usize * 3,
        )
    }

    #[test]
    fn test_header_describes_the_frame() {
        let thumbnail = PpmEncoder::new().encode(&solid_frame(64, 48, 10)).unwrap();
        assert!(thumbnail.data.starts_with(b"P6\n64 48\n255\n"));
        assert_eq!(thumbnail.width, 64);
        assert_eq!(thumbnail.height, 48);
        assert_eq!(thumbnail.encoding, ThumbnailEncoding::Ppm);
    }

    #[test]
    fn test_payload_is_exactly_header_plus_pixels() {
        let thumbnail = PpmEncoder::new().encode(&solid_frame(64, 48, 10)).unwrap();
        let header_len = b"P6\n64 48\n255\n".len();
        assert_eq!(thumbnail.data.len(), header_len + 64 * 48 * 3);
    }

    #[test]
    fn test_padded_rows_are_copied_without_padding() {
        // 2x2 frame, stride 8: rows end with two 0xEE padding bytes.
        let data = vec![
            1, 1, 1, 2, 2, 2, 0xEE, 0xEE, //
            3, 3, 3, 4, 4, 4, 0xEE, 0xEE,
        ];
        let frame = RgbFrame::new(data, 2, 2, 8);

        let thumbnail = PpmEncoder::new().encode(&frame).unwrap();
        let header_len = b"P6\n2 2\n255\n".len();
        assert_eq!(thumbnail.data.len(), header_len + 12);
        assert_eq!(
            &thumbnail.data[header_len..],
            &[1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let frame = solid_frame(16, 16, 200);
        let encoder = PpmEncoder::new();
        assert_eq!(
            encoder.encode(&frame).unwrap().data,
            encoder.encode(&frame).unwrap().data
        );
    }
}
