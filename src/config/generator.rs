//! Generator configuration.

use config::ConfigError;
use serde::Deserialize;

/// Defaults for random RUT generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Lowest body that may be generated.
    #[serde(default = "default_min")]
    pub min: u32,

    /// Exclusive upper bound for generated bodies.
    #[serde(default = "default_max")]
    pub max: u32,

    /// Fixed seed for reproducible output (random if unset).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Default lower bound.
    pub const DEFAULT_MIN: u32 = 5_000_000;

    /// Default exclusive upper bound.
    pub const DEFAULT_MAX: u32 = 23_000_000;

    /// Smallest 7-digit body.
    pub const BODY_FLOOR: u32 = 1_000_000;

    /// One past the largest 8-digit body.
    pub const BODY_CEILING: u32 = 100_000_000;

    /// Validate the range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or would produce bodies
    /// outside 7–8 digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::Message(format!(
                "generator.min ({}) must be less than generator.max ({})",
                self.min, self.max
            )));
        }
        if self.min < Self::BODY_FLOOR {
            return Err(ConfigError::Message(format!(
                "generator.min cannot be below {}",
                Self::BODY_FLOOR
            )));
        }
        if self.max > Self::BODY_CEILING {
            return Err(ConfigError::Message(format!(
                "generator.max cannot exceed {}",
                Self::BODY_CEILING
            )));
        }
        Ok(())
    }
}

const fn default_min() -> u32 {
    GeneratorConfig::DEFAULT_MIN
}

const fn default_max() -> u32 {
    GeneratorConfig::DEFAULT_MAX
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            seed: None,
        }
    }
}
