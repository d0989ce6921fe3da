use crate::error::{Result, SatError};
use crate::model::DEFAULT_MAX_SCORE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "sat_data.json";

/// Configuration for satman, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SatConfig {
    /// Data file name, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Max score for a store created from scratch
    #[serde(default = "default_max_score")]
    pub default_max_score: f64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_max_score() -> f64 {
    DEFAULT_MAX_SCORE
}

impl Default for SatConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_max_score: default_max_score(),
        }
    }
}

impl SatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SatError::Io)?;
        let config: SatConfig = serde_json::from_str(&content).map_err(SatError::Serialization)?;
        Ok(config)
    }

    /// Full path of the data file inside `data_dir`
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_file)
    }
}
