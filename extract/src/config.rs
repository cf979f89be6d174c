//! Extractor configuration.
//!
//! The heuristics are tuned to one document's layout; the thresholds live
//! here as named defaults and can be overridden from a YAML file without
//! recompiling.
//!
//! # Example YAML
//!
//! ```yaml
//! lookahead_window: 8
//! wrap_capacity: 3
//! default_state: ABIA
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use ward_hierarchy_core::normalize_key;

use crate::error::{ExtractError, Result};

/// Number of following lines the lookahead oracle inspects.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 8;

/// Maximum number of fragments a wrap buffer holds.
pub const DEFAULT_WRAP_CAPACITY: usize = 3;

/// State assumed for rows that precede the first state header.
///
/// The source document opens mid-table on Abia's LGAs with no header.
pub const DEFAULT_STATE: &str = "ABIA";

/// Tunable thresholds for one extraction run.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_extract::ExtractorConfig;
///
/// let config = ExtractorConfig::from_yaml_str("lookahead_window: 12").unwrap();
/// assert_eq!(config.lookahead_window, 12);
/// assert_eq!(config.wrap_capacity, 3);
/// assert_eq!(config.default_state, "ABIA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Lines scanned ahead when disambiguating numerals and bare state names.
    pub lookahead_window: usize,
    /// Capacity of the LGA and ward wrap buffers.
    pub wrap_capacity: usize,
    /// State key used until the first state header is seen.
    pub default_state: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            wrap_capacity: DEFAULT_WRAP_CAPACITY,
            default_state: DEFAULT_STATE.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](ExtractError::Io) if the file cannot be read,
    /// [`Yaml`](ExtractError::Yaml) if parsing fails, or
    /// [`InvalidConfig`](ExtractError::InvalidConfig) if a value is out of
    /// range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        if self.lookahead_window == 0 {
            return Err(ExtractError::InvalidConfig(
                "lookahead_window must be at least 1".to_string(),
            ));
        }
        if self.wrap_capacity == 0 {
            return Err(ExtractError::InvalidConfig(
                "wrap_capacity must be at least 1".to_string(),
            ));
        }
        if self.default_state_key().is_empty() {
            return Err(ExtractError::InvalidConfig(
                "default_state cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The default state as a normalized key.
    pub fn default_state_key(&self) -> String {
        normalize_key(&self.default_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_thresholds() {
        let config = ExtractorConfig::default();
        assert_eq!(config.lookahead_window, 8);
        assert_eq!(config.wrap_capacity, 3);
        assert_eq!(config.default_state_key(), "ABIA");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let config = ExtractorConfig::from_yaml_str("default_state: cross  river\n").unwrap();
        assert_eq!(config.lookahead_window, DEFAULT_LOOKAHEAD_WINDOW);
        assert_eq!(config.default_state_key(), "CROSS RIVER");
    }

    #[test]
    fn test_rejects_zero_window() {
        let err = ExtractorConfig::from_yaml_str("lookahead_window: 0").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
        assert_eq!(
            err.to_string(),
            "invalid config: lookahead_window must be at least 1"
        );
    }

    #[test]
    fn test_rejects_blank_default_state() {
        let err = ExtractorConfig::from_yaml_str("default_state: '  '").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = ExtractorConfig::from_yaml_str("wrap_capacity: [1, 2]").unwrap_err();
        assert!(matches!(err, ExtractError::Yaml(_)));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extractor.yml");

        let original = ExtractorConfig {
            lookahead_window: 5,
            wrap_capacity: 2,
            default_state: "LAGOS".to_string(),
        };
        original.save(&path).unwrap();

        let loaded = ExtractorConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExtractorConfig::load(dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
