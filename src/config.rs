use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{DosingError, DoseResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rounding: RoundingMode,
    pub format: OutputFormat,
}

/// Tie-break used when a dose falls exactly between two 250 mg steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    #[default]
    HalfAwayFromZero,
    HalfEven,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> DoseResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> DoseResult<Self> {
        if content.trim().is_empty() {
            return Err(DosingError::Config(
                "Configuration file is empty".to_string()
            ));
        }
        let config: Config = serde_json::from_str(content)?;
        Ok(config)
    }
}
