//! Respawn search configuration.
//!
//! Loaded from a JSON5 file owned by the host, e.g.
//!
//! ```json5
//! {
//!     // Respawn at least this many blocks away from the death location (per axis)
//!     min_respawn_distance: 256,
//!     max_respawn_distance: 1024,
//!     // A bed within this Manhattan distance of the death location wins
//!     bed_range: 128,
//! }
//! ```

use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised while loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read respawn config: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON5 or has the wrong shape.
    #[error("Failed to parse respawn config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A distance is negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// The search ring is empty.
    #[error("`min_respawn_distance` ({min}) must be lower than `max_respawn_distance` ({max})")]
    EmptyRange {
        /// Configured minimum distance.
        min: i32,
        /// Configured maximum distance.
        max: i32,
    },
}

/// Distances controlling where a player may respawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespawnConfig {
    /// Lower bound (inclusive) of the per-axis offset from the death location.
    pub min_respawn_distance: i32,
    /// Upper bound (exclusive) of the per-axis offset from the death location.
    pub max_respawn_distance: i32,
    /// Maximum Manhattan distance between a bed and the death location for
    /// the bed to be used instead of a random respawn point.
    pub bed_range: i32,
}

impl Default for RespawnConfig {
    fn default() -> Self {
        Self {
            min_respawn_distance: 256,
            max_respawn_distance: 1024,
            bed_range: 128,
        }
    }
}

impl RespawnConfig {
    /// Parses and validates a JSON5 document. Missing fields take their defaults.
    pub fn from_json5_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the config at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_json5_str(&source)
    }

    /// Like [`RespawnConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(source) => Self::from_json5_str(&source),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No respawn config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Checks that all distances are non-negative and the search ring is not empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_respawn_distance", self.min_respawn_distance),
            ("max_respawn_distance", self.max_respawn_distance),
            ("bed_range", self.bed_range),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.min_respawn_distance >= self.max_respawn_distance {
            return Err(ConfigError::EmptyRange {
                min: self.min_respawn_distance,
                max: self.max_respawn_distance,
            });
        }
        Ok(())
    }
}
