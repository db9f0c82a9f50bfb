//! Error types.
//!
//! Playback itself is total; only configuration loading can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid default frame rate: {value}")]
    InvalidFrameRate { value: f64 },
    #[error("invalid default play rate: {value}")]
    InvalidPlayRate { value: f64 },
}
