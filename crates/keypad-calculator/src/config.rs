//! Engine configuration
//!
//! Loaded from a YAML file and then overridden by command-line flags.
//!
//! ```yaml
//! error_marker: "Error"
//! significant_digits: 15
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::format::{DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
use crate::error::{ShellError, ShellResult};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Text shown on the display after an arithmetic error
    pub error_marker: String,
    /// Significant digits used when formatting results
    pub significant_digits: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_marker: "Error".to_string(),
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error marker
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Set the number of significant digits
    #[must_use]
    pub const fn with_significant_digits(mut self, digits: u8) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Check that the values are usable
    ///
    /// The error marker must be non-empty and must not read as a number,
    /// otherwise it could be mistaken for a result.
    pub fn validate(&self) -> ShellResult<()> {
        if self.error_marker.trim().is_empty() {
            return Err(ShellError::invalid_config("error_marker must not be empty"));
        }
        if self.error_marker.trim().parse::<f64>().is_ok() {
            return Err(ShellError::invalid_config(format!(
                "error_marker {:?} reads as a number",
                self.error_marker
            )));
        }
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(ShellError::invalid_config(format!(
                "significant_digits must be between 1 and {MAX_SIGNIFICANT_DIGITS}, got {}",
                self.significant_digits
            )));
        }
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(text: &str) -> ShellResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(text).map_err(|e| ShellError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file
    pub fn load(path: &Path) -> ShellResult<Self> {
        debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&text)
            .map_err(|e| ShellError::config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.error_marker, "Error");
        assert_eq!(config.significant_digits, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_error_marker("E")
            .with_significant_digits(10);
        assert_eq!(config.error_marker, "E");
        assert_eq!(config.significant_digits, 10);
    }

    #[test]
    fn test_validate_empty_marker() {
        let config = EngineConfig::new().with_error_marker("  ");
        assert!(matches!(
            config.validate(),
            Err(ShellError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_numeric_marker() {
        let config = EngineConfig::new().with_error_marker("0");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_digits_range() {
        assert!(EngineConfig::new().with_significant_digits(0).validate().is_err());
        assert!(EngineConfig::new().with_significant_digits(18).validate().is_err());
        assert!(EngineConfig::new().with_significant_digits(1).validate().is_ok());
        assert!(EngineConfig::new().with_significant_digits(17).validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = EngineConfig::from_yaml_str("error_marker: Ошибка\n").unwrap();
        assert_eq!(config.error_marker, "Ошибка");
        assert_eq!(config.significant_digits, 15);
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = "error_marker: \"E\"\nsignificant_digits: 8\n";
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config, EngineConfig::new().with_error_marker("E").with_significant_digits(8));
    }

    #[test]
    fn test_from_yaml_unknown_field() {
        let result = EngineConfig::from_yaml_str("theme: dark\n");
        assert!(matches!(result, Err(ShellError::Config { .. })));
    }

    #[test]
    fn test_from_yaml_invalid_values() {
        let result = EngineConfig::from_yaml_str("significant_digits: 40\n");
        assert!(matches!(result, Err(ShellError::InvalidConfig { .. })));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "significant_digits: 6").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.significant_digits, 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::load(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ShellError::Io(_))));
    }

    #[test]
    fn test_load_bad_yaml_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "significant_digits: [1, 2").unwrap();
        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = EngineConfig::new().with_error_marker("Err");
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
