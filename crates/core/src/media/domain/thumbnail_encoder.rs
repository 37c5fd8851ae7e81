use crate::error::ExtractError;
use crate::shared::rgb_frame::RgbFrame;
use crate::shared::thumbnail::Thumbnail;

/// Serializes a converted frame into its final artifact.
pub trait ThumbnailEncoder: Send {
    fn encode(&self, frame: &RgbFrame) -> Result<Thumbnail, ExtractError>;
}
