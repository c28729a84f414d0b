//! Error types for parsing and presenting typed values.

use thiserror::Error;

/// Errors raised by a single criteria operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CriteriaError {
    /// Input text does not have the shape the type expects.
    #[error("{type_name}: '{input}' does not match the expected pattern")]
    ParseMismatch {
        type_name: &'static str,
        input: String,
    },

    /// Unit token is not in the conversion table for its domain.
    #[error("unknown {domain} unit '{unit}'")]
    UnknownUnit { domain: &'static str, unit: String },

    /// Time unit letter has no known length in seconds.
    #[error("unknown time unit '{unit}'")]
    UnknownTimeUnit { unit: char },

    /// Text could not be read as an absolute or relative date.
    #[error("invalid date '{input}'")]
    InvalidDate { input: String },

    /// Configured date format has an invalid specifier.
    #[error("invalid date format '{format}'")]
    InvalidDateFormat { format: String },

    /// Canonical value of the wrong kind was handed to `present`.
    #[error("{type_name} cannot present a {kind} value")]
    ValueKindMismatch {
        type_name: &'static str,
        kind: &'static str,
    },

    /// Type keeps raw values and has no parse step.
    #[error("{type_name} values are not sanitized")]
    NotSanitizable { type_name: &'static str },

    /// No criteria is registered under the name.
    #[error("no criteria registered for type '{type_name}'")]
    UnknownType { type_name: String },
}

/// A criteria failure tagged with the record and field it came from.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("record {record}, field '{field}': {source}")]
pub struct NormalizeError {
    /// Zero-based index of the record in the pass.
    pub record: usize,
    /// Field (and type) name.
    pub field: String,
    #[source]
    pub source: CriteriaError,
}

/// Errors raised while loading [`crate::NormalizeSettings`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for criteria operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
