//! Per-type criteria: the parse and render contract for each semantic type.
//!
//! # Architecture
//!
//! Each supported type is a unit-like struct implementing [`Criteria`].
//! Criteria are collected in a [`crate::CriteriaRegistry`] keyed by
//! [`Criteria::type_name`], which is also the field name the normalizer
//! matches on.
//!
//! | type       | canonical value         | presented as                |
//! |------------|-------------------------|-----------------------------|
//! | `color`    | packed HSL bytes        | background `#rrggbb`        |
//! | `date`     | UTC point in time       | calendar date text          |
//! | `distance` | meters                  | `km`, `m` or `cm` text      |
//! | `duration` | seconds                 | seconds with `s` suffix     |
//! | `element`  | number (NaN if invalid) | number text                 |
//! | `letter`   | code point              | the letter                  |
//! | `mass`     | grams                   | `kg` or `g` text            |
//! | `number`   | raw text, unchanged     | number text                 |

mod color;
mod date;
mod distance;
mod duration;
mod element;
mod letter;
mod mass;
mod number;
mod quantity;

pub use color::ColorCriteria;
pub use date::{Clock, DateCriteria};
pub use distance::DistanceCriteria;
pub use duration::DurationCriteria;
pub use element::ElementCriteria;
pub use letter::LetterCriteria;
pub use mass::MassCriteria;
pub use number::NumberCriteria;

use crate::error::{CriteriaError, Result};
use crate::render::RenderTarget;
use crate::value::Value;

/// Parse and render behavior for one semantic type.
///
/// # Implementing a Criteria
///
/// ```ignore
/// struct Percent;
///
/// impl Criteria for Percent {
///     fn type_name(&self) -> &'static str {
///         "percent"
///     }
///
///     fn sanitize(&self, raw: &str) -> Result<Value> {
///         Ok(Value::Number(coerce_number(raw.trim_end_matches('%')) / 100.0))
///     }
///
///     fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
///         let n = expect_number(self.type_name(), value)?;
///         target.set_text(&format!("{}%", to_fixed0(n * 100.0)));
///         Ok(())
///     }
/// }
/// ```
pub trait Criteria: Send + Sync {
    /// Type name, matched verbatim against record field names.
    fn type_name(&self) -> &'static str;

    /// Returns a human-readable description of the type.
    fn description(&self) -> &'static str {
        "Typed value"
    }

    /// Whether raw values of this type are rewritten by the normalizer.
    fn sanitizes(&self) -> bool {
        true
    }

    /// Parse raw text into the canonical value.
    ///
    /// # Errors
    ///
    /// Returns an error when the text does not have the type's shape, names
    /// an unknown unit, or the type does not sanitize at all.
    fn sanitize(&self, raw: &str) -> Result<Value> {
        let _ = raw;
        Err(CriteriaError::NotSanitizable {
            type_name: self.type_name(),
        })
    }

    /// Render a canonical value onto `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::ValueKindMismatch`] when `value` is not a
    /// kind this type renders.
    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()>;
}

/// Extracts a number for `present`, or reports the mismatched kind.
pub(crate) fn expect_number(type_name: &'static str, value: &Value) -> Result<f64> {
    value.as_number().ok_or(CriteriaError::ValueKindMismatch {
        type_name,
        kind: value.kind(),
    })
}

pub(crate) fn kind_mismatch(type_name: &'static str, value: &Value) -> CriteriaError {
    CriteriaError::ValueKindMismatch {
        type_name,
        kind: value.kind(),
    }
}
