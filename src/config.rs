//! Engine configuration
//!
//! Layout constants and autoplay behaviour, supplied by the page at startup
//! either as a JS object or as a JSON string. Every field is optional; missing
//! fields take the defaults of the reference page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::CardConfig;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `maxWidth` was a string other than `"uncapped"`
    #[error("Invalid maxWidth '{0}' (expected a pixel number or \"uncapped\")")]
    InvalidMaxWidth(String),

    /// A layout constant was negative or NaN
    #[error("Invalid value for {name}: {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    /// The config document itself could not be parsed
    #[error("Invalid configuration document: {0}")]
    Parse(String),
}

/// Top-level engine configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    /// Card sizing constants
    pub card: CardConfig,

    /// Delay before playback starts automatically once ready (ms); `None` disables
    pub autoplay_delay_ms: Option<f64>,
}

impl SyncConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SyncConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.card.validate()?;
        if let Some(delay) = self.autoplay_delay_ms {
            if delay.is_nan() || delay < 0.0 {
                return Err(ConfigError::InvalidConstant {
                    name: "autoplayDelayMs",
                    value: delay,
                });
            }
        }
        Ok(())
    }
}
