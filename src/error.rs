use thiserror::Error;

/// Errors raised while building colors and canvases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("canvas of {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },

    #[error("{channel} channel out of range: {value} (expected 0..=255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}
