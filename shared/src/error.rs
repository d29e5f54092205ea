use thiserror::Error;

/// Reasons an overlay refuses to construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    #[error("hotspot set is empty")]
    NoHotspots,
    #[error("hotspot `{key}` has no \"default\" name")]
    MissingDefaultName { key: String },
    #[error("color channel {channel} = {value} is out of range 0..=255")]
    ColorChannelOutOfRange { channel: char, value: i64 },
    #[error("image has no natural size ({width}x{height})")]
    InvalidImageMetrics { width: u32, height: u32 },
    #[error("duplicate hotspot key `{key}`")]
    DuplicateKey { key: String },
}
