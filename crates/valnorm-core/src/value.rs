//! Canonical values and records.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conversion::number::js_number_string;

/// A field value, either raw text or the canonical form a criteria produced.
///
/// Only `Text` is considered unsanitized; every other variant is the output
/// of a `sanitize` call and is left alone by later normalization passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Raw text as supplied by the caller.
    Text(String),
    /// Scalar in the base unit of its type (meters, grams, seconds) or a
    /// plain number.
    Number(f64),
    /// 24-bit packed color.
    Color(u32),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Unicode code point of a single letter.
    CharCode(u32),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Date(_) => "date",
            Value::CharCode(_) => "char_code",
        }
    }

    /// Returns true if the value has not been sanitized yet.
    pub fn is_raw(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(n) => f.write_str(&js_number_string(*n)),
            Value::Color(packed) => write!(f, "0x{packed:06x}"),
            Value::Date(date) => write!(f, "{}", date.to_rfc3339()),
            Value::CharCode(code) => write!(f, "{code}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// A record: field name to value, ordered by field name.
pub type Record = BTreeMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_text_is_raw() {
        assert!(Value::from("12km").is_raw());
        assert!(!Value::Number(12.0).is_raw());
        assert!(!Value::Color(0).is_raw());
        assert!(!Value::CharCode(65).is_raw());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(1500.0).to_string(), "1500");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Color(0xff80).to_string(), "0x00ff80");
        assert_eq!(Value::from("raw").to_string(), "raw");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Value::Number(5.0)).unwrap();
        assert_eq!(json, r#"{"kind":"number","value":5.0}"#);

        let back: Value = serde_json::from_str(r#"{"kind":"char_code","value":65}"#).unwrap();
        assert_eq!(back, Value::CharCode(65));
    }
}
