//! Analysis configuration
//!
//! Every tunable constant of the pipeline lives here: the bottleneck
//! threshold, the severity bin edges, and the impact projection inputs.
//! Values can be overlaid from a TOML file; CLI flags override both.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Tunable parameters for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Stages whose mean outgoing duration strictly exceeds this are bottlenecks
    pub bottleneck_threshold_hours: f64,
    /// Upper edge (inclusive) of the MODERATE severity bin
    pub moderate_max_hours: f64,
    /// Upper edge (inclusive) of the HIGH severity bin
    pub high_max_hours: f64,
    /// Expected ticket volume per year for the impact projection
    pub annual_tickets: u64,
    /// Target fractional reduction in bottleneck time (0.30 = 30%)
    pub improvement_pct: f64,
    /// Loaded cost per staff hour
    pub hourly_cost: f64,
    /// How many top stages feed the impact estimate
    pub top_bottlenecks: usize,
    /// Hours in a standard work year, for the FTE conversion
    pub work_year_hours: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bottleneck_threshold_hours: 20.0,
            moderate_max_hours: 30.0,
            high_max_hours: 40.0,
            annual_tickets: 500,
            improvement_pct: 0.30,
            hourly_cost: 30.0,
            top_bottlenecks: 2,
            work_year_hours: 2080.0,
        }
    }
}

/// On-disk shape: an optional `[analysis]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    analysis: Option<AnalysisConfig>,
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults; a missing `[analysis]`
    /// table yields the full default config.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(file.analysis.unwrap_or_default())
    }
}
