//! `duration`: a number and a time unit letter, stored in seconds.

use tracing::debug;

use crate::conversion::number::js_number_string;
use crate::conversion::time::seconds_per_unit;
use crate::error::Result;
use crate::render::RenderTarget;
use crate::value::Value;

use super::quantity::scan_quantity;
use super::{Criteria, expect_number};

/// Seconds used when the text has no number followed by a unit.
pub const FALLBACK_SECONDS: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct DurationCriteria;

impl Criteria for DurationCriteria {
    fn type_name(&self) -> &'static str {
        "duration"
    }

    fn description(&self) -> &'static str {
        "Number and time unit letter (s, m, h, d, w, M, y), stored in seconds"
    }

    /// Only the first character of the unit counts, so `5min` is five
    /// minutes and `2 hours` two hours. Text with no number and unit at all
    /// falls back to one second instead of failing; a bare number such as
    /// `90` reads its last digit as the unit and fails.
    fn sanitize(&self, raw: &str) -> Result<Value> {
        let Some(quantity) = scan_quantity(raw) else {
            debug!(
                fallback = FALLBACK_SECONDS,
                "duration has no quantity, using fallback"
            );
            return Ok(Value::Number(FALLBACK_SECONDS));
        };
        let unit = quantity.unit.chars().next().unwrap_or_default();
        Ok(Value::Number(
            FALLBACK_SECONDS * seconds_per_unit(unit)? * quantity.amount,
        ))
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let seconds = expect_number(self.type_name(), value)?;
        target.set_text(&format!("{}s", js_number_string(seconds)));
        Ok(())
    }
}
