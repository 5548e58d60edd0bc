//! Startup errors
//!
//! The simulation itself has no recoverable failures; everything here is
//! caught once before the first frame is scheduled.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid screen size {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },

    #[error("scroll speed must be positive and finite, got {0}")]
    InvalidScrollSpeed(f32),

    #[error("palette color `{0}` is empty")]
    InvalidColor(&'static str),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
