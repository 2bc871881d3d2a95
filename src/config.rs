//! Import options.
//!
//! Options can be built in code or read from a JSON or YAML document:
//!
//! ```yaml
//! length_factor: 25.4
//! warn_missing_measurements: false
//! ```
//!
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::base::RASAERO_TO_INTERNAL_LENGTH;
use crate::error::ConfigError;

/// Options controlling a single import pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// RASAero length units per internal length unit. Every raw length is
    /// divided by this value.
    pub length_factor: f64,

    /// Record a warning when a fin can closes without an inside diameter or
    /// shoulder length.
    pub warn_missing_measurements: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            length_factor: RASAERO_TO_INTERNAL_LENGTH,
            warn_missing_measurements: true,
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length conversion factor.
    pub fn with_length_factor(mut self, factor: f64) -> Self {
        self.length_factor = factor;
        self
    }

    /// Enable or disable missing measurement warnings.
    pub fn with_missing_measurement_warnings(mut self, enabled: bool) -> Self {
        self.warn_missing_measurements = enabled;
        self
    }

    /// Check that the options describe a usable conversion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.length_factor.is_finite() || self.length_factor <= 0.0 {
            return Err(ConfigError::InvalidLengthFactor(self.length_factor));
        }
        Ok(())
    }

    /// Parse and validate options from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a `.json`, `.yaml` or `.yml` file.
    pub fn read_from_file(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(ConfigError::UnsupportedFile(path.display().to_string().into())),
        }
    }
}
