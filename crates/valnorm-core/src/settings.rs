//! Settings for normalization passes.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Date format used when presenting dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// What a normalization pass does when a field fails to sanitize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Keep the raw value, record the failure and continue.
    #[default]
    Isolate,
    /// Stop the pass at the first failure.
    FailFast,
}

impl ErrorPolicy {
    /// Same spelling the settings file uses.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Isolate => "isolate",
            Self::FailFast => "fail_fast",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings for normalizing and presenting records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeSettings {
    /// Failure handling for the field normalizer.
    pub error_policy: ErrorPolicy,

    /// `chrono` format string for presented dates.
    pub date_format: String,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl NormalizeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = NormalizeSettings::default();
        assert_eq!(settings.error_policy, ErrorPolicy::Isolate);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_from_toml_partial() {
        let settings = NormalizeSettings::from_toml("error_policy = \"fail_fast\"\n").unwrap();
        assert_eq!(settings.error_policy, ErrorPolicy::FailFast);
        assert_eq!(settings.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_from_toml_rejects_unknown_policy() {
        assert!(NormalizeSettings::from_toml("error_policy = \"retry\"\n").is_err());
    }

    #[test]
    fn test_label_parses_back() {
        for policy in [ErrorPolicy::Isolate, ErrorPolicy::FailFast] {
            let toml = format!("error_policy = \"{policy}\"\n");
            let settings = NormalizeSettings::from_toml(&toml).unwrap();
            assert_eq!(settings.error_policy, policy);
        }
        assert_eq!(ErrorPolicy::FailFast.to_string(), "fail_fast");
    }

    #[test]
    fn test_load_missing_file() {
        let err = NormalizeSettings::load(Path::new("/nonexistent/valnorm.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
