//! Runtime settings
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file (or none at all) is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;
use crate::error::ConfigError;

/// Highest tick rate the loop accepts
pub const MAX_TICK_RATE_HZ: u32 = 240;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// RNG seed for pipe layout (random when absent)
    pub seed: Option<u64>,
    /// Let the built-in controller do the jumping
    pub autopilot: bool,
    /// Sleep between ticks to hold the tick rate (off = run flat out)
    pub paced: bool,
    /// Stop after this many ticks even if the bird is still alive
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            seed: None,
            autopilot: true,
            paced: true,
            // Two minutes of play
            max_ticks: Some(TICK_RATE_HZ as u64 * 120),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 || self.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(ConfigError::Invalid(format!(
                "tick_rate_hz must be in 1..={}, got {}",
                MAX_TICK_RATE_HZ, self.tick_rate_hz
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(ConfigError::Invalid("max_ticks must be positive".into()));
        }
        Ok(())
    }

    /// Seed to use for a new session
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
