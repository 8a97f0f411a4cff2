//! Normalizer configuration
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the standard validation rules.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AVAILABILITY_STATUS, DEFAULT_OPEN_TO_REMOTE, DEFAULT_PHONE_MIN_LENGTH,
    DEFAULT_WEIGHT_DECIMALS,
};
use crate::errors::{ProfileHubError, Result};

/// Tunables for draft normalization and the availability form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Minimum length of a reference phone number
    pub phone_min_length: usize,
    /// Decimal places kept on a valid reference weight
    pub weight_decimals: u32,
    /// Availability status used when a profile has none
    pub default_availability_status: String,
    /// Remote preference used when a profile has none
    pub default_open_to_remote: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            phone_min_length: DEFAULT_PHONE_MIN_LENGTH,
            weight_decimals: DEFAULT_WEIGHT_DECIMALS,
            default_availability_status: DEFAULT_AVAILABILITY_STATUS.to_string(),
            default_open_to_remote: DEFAULT_OPEN_TO_REMOTE,
        }
    }
}

impl NormalizerConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ProfileHubError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ProfileHubError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<()> {
        if self.phone_min_length == 0 {
            return Err(ProfileHubError::Config("phone_min_length must be positive".to_string()));
        }
        // f64 carries ~15 significant decimal digits.
        if self.weight_decimals > 15 {
            return Err(ProfileHubError::Config("weight_decimals must be at most 15".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = NormalizerConfig::from_toml_str("").expect("empty TOML is valid");
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.phone_min_length, 6);
        assert_eq!(config.weight_decimals, 2);
        assert_eq!(config.default_availability_status, "limited");
        assert!(config.default_open_to_remote);
    }

    #[test]
    fn test_partial_document_overrides() {
        let config = NormalizerConfig::from_toml_str(
            "phone_min_length = 8\ndefault_availability_status = \"open\"\n",
        )
        .expect("partial TOML is valid");

        assert_eq!(config.phone_min_length, 8);
        assert_eq!(config.default_availability_status, "open");
        assert_eq!(config.weight_decimals, 2);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = NormalizerConfig::from_toml_str("phone_min_length = 0").unwrap_err();
        assert!(matches!(err, ProfileHubError::Config(_)));

        let err = NormalizerConfig::from_toml_str("weight_decimals = \"two\"").unwrap_err();
        assert!(matches!(err, ProfileHubError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "weight_decimals = 3").expect("write config");

        let config = NormalizerConfig::load(file.path()).expect("config loads");
        assert_eq!(config.weight_decimals, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = NormalizerConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: /definitely/not/here.toml"));
    }
}
