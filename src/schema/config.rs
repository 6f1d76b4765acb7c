//! Configuration types for Game of Life simulation parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::MAX_DIMENSION;

/// Default tick interval when the config omits it.
fn default_tick_interval_ms() -> u64 {
    100
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells (1-255).
    pub width: usize,
    /// Grid height in cells (1-255).
    pub height: usize,
    /// Delay between generations when driven interactively. 0 runs unpaced.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Grid dimensions {width}x{height} exceed maximum of {max}x{max}", max = MAX_DIMENSION)]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
