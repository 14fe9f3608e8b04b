//! Error types for asset construction and configuration loading
//!
//! The simulation itself has no error paths; these only surface while
//! setting a session up.

/// Sprite or mask construction failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    /// Width or height is zero.
    #[error("sprite '{name}' has zero size")]
    EmptyImage { name: &'static str },

    /// `width * height * 4` does not fit in memory addressing.
    #[error("sprite '{name}' is too large ({width}x{height})")]
    TooLarge {
        name: &'static str,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match `width * height * 4`.
    #[error("sprite '{name}' expected {expected} bytes of RGBA data, got {actual}")]
    BufferSize {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Bird animation frames must share one size.
    #[error("bird frame '{name}' differs in size from the first frame")]
    FrameSizeMismatch { name: &'static str },
}

/// Settings loading and validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
