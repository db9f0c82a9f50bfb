//! Core configuration for vizij-anim-clock.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Defaults applied to every new [`AnimInterface`](crate::AnimInterface).
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Native frames per second of new animations.
    pub default_frame_rate: f64,
    /// Initial play-rate multiplier.
    pub default_play_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_frame_rate: 24.0,
            default_play_rate: 1.0,
        }
    }
}

impl Config {
    /// Parse a config from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_frame_rate.is_finite() || self.default_frame_rate < 0.0 {
            return Err(ConfigError::InvalidFrameRate {
                value: self.default_frame_rate,
            });
        }
        if !self.default_play_rate.is_finite() {
            return Err(ConfigError::InvalidPlayRate {
                value: self.default_play_rate,
            });
        }
        Ok(())
    }
}
