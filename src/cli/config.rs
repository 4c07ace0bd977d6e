//! TOML configuration file support for recurring QC settings.
//!
//! Instead of passing many CLI flags, users can specify settings in a
//! config file:
//!
//! ```toml
//! # diaqc.toml
//! [qc]
//! protease = "trypsin"
//! max_missed_cleavages = 2
//! min_values_for_cv = 3
//! cv_threshold = 0.2
//! ```
//!
//! Explicit CLI flags take precedence over config file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for diaqc.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// QC pipeline settings.
    #[serde(default)]
    pub qc: QcConfig,
}

/// Configuration for the summarize command.
#[derive(Debug, Default, Deserialize)]
pub struct QcConfig {
    /// Protease name (trypsin, lysc, argc, chymotrypsin, gluc).
    pub protease: Option<String>,

    /// Highest missed-cleavage bucket.
    pub max_missed_cleavages: Option<usize>,

    /// Minimum observations per group for CV statistics.
    pub min_values_for_cv: Option<usize>,

    /// CV pass threshold as a fraction.
    pub cv_threshold: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [qc]
            protease = "gluc"
            max_missed_cleavages = 3
            min_values_for_cv = 4
            cv_threshold = 0.15
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.qc.protease.as_deref(), Some("gluc"));
        assert_eq!(config.qc.max_missed_cleavages, Some(3));
        assert_eq!(config.qc.min_values_for_cv, Some(4));
        assert_eq!(config.qc.cv_threshold, Some(0.15));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [qc]
            max_missed_cleavages = 1
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.qc.max_missed_cleavages, Some(1));
        assert_eq!(config.qc.protease, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.qc.min_values_for_cv, None);
    }
}
