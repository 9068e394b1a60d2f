//! Generator tunables
//!
//! The defaults are the constants the layout algorithm is tuned around.
//! Configs can be parsed from JSON; missing fields fall back to defaults.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::path::Path;

use crate::error::GenError;

/// Knobs for each generation phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Candidate room side lengths, each even and at least 4
    pub room_sizes: Vec<usize>,
    /// Target room count is `(width + height) / room_density_divisor`
    pub room_density_divisor: usize,
    /// Placement attempts allowed per target room
    pub room_attempts_per_room: usize,
    /// Probability of continuing a corridor in its previous direction
    pub straight_bias: f64,
    /// Probability that a connector made redundant by a merge is opened anyway
    pub extra_door_chance: f64,
    /// Number of dead-end culling passes
    pub cull_passes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_sizes: vec![4, 6, 8],
            room_density_divisor: 4,
            room_attempts_per_room: 4,
            straight_bias: 0.75,
            extra_door_chance: 0.02,
            cull_passes: 10,
        }
    }
}

impl GeneratorConfig {
    /// Check every field is in range
    pub fn validate(&self) -> Result<(), GenError> {
        if self.room_sizes.is_empty() {
            return Err(GenError::InvalidConfig(
                "room_sizes must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self.room_sizes.iter().find(|&&s| s < 4 || s % 2 != 0) {
            return Err(GenError::InvalidConfig(format!(
                "room size {} must be even and at least 4",
                bad
            )));
        }
        if self.room_density_divisor == 0 {
            return Err(GenError::InvalidConfig(
                "room_density_divisor must be at least 1".to_string(),
            ));
        }
        for (name, p) in [
            ("straight_bias", self.straight_bias),
            ("extra_door_chance", self.extra_door_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GenError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(())
    }

    /// Target number of rooms for a grid
    pub fn target_rooms(&self, width: usize, height: usize) -> usize {
        (width + height) / self.room_density_divisor.max(1)
    }

    /// Parse and validate a JSON config
    #[cfg(feature = "std")]
    pub fn parse_json(contents: &str) -> Result<Self, GenError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| GenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    #[cfg(feature = "std")]
    pub fn load_from_file(path: &Path) -> Result<Self, GenError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| GenError::Config(e.to_string()))?;

        Self::parse_json(&contents)
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "std")]
    pub fn to_json(&self) -> Result<String, GenError> {
        serde_json::to_string_pretty(self).map_err(|e| GenError::Config(e.to_string()))
    }
}
