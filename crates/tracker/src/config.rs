//! Runtime configuration for the `tracker` binary.

use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Biometrics;

pub const CONFIG_PATH_VAR: &str = "TRACKER_CONFIG";
pub const WEIGHT_VAR: &str = "TRACKER_WEIGHT";
pub const HEIGHT_VAR: &str = "TRACKER_HEIGHT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Biometrics applied to every record the binary reads.
///
/// Values are not range-checked here; the calorie calculator rejects
/// non-positive weight or height per record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Body weight in kilograms.
    pub weight: f64,
    /// Height in metres.
    pub height: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            weight: 75.0,
            height: 1.75,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the process environment.
    ///
    /// Starts from the JSON file named by `TRACKER_CONFIG` (or the defaults
    /// when unset), then applies `TRACKER_WEIGHT` and `TRACKER_HEIGHT`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };

        if let Some(value) = lookup(WEIGHT_VAR) {
            config.weight = parse_var(WEIGHT_VAR, value)?;
        }
        if let Some(value) = lookup(HEIGHT_VAR) {
            config.height = parse_var(HEIGHT_VAR, value)?;
        }

        Ok(config)
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn biometrics(&self) -> Biometrics {
        Biometrics::new(self.weight, self.height)
    }
}

fn parse_var(var: &'static str, value: String) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar { var, value })
}
