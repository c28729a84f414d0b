//! Tokenizer for "number then unit" text such as `12.5 km`.

use crate::conversion::number::leading_float;
use crate::conversion::units::UnitTable;
use crate::error::{CriteriaError, Result};
use crate::value::Value;

/// A number followed by a unit token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quantity<'a> {
    pub amount: f64,
    pub unit: &'a str,
}

/// Finds the first run of digits and dots, then the non-whitespace unit
/// after it. Whitespace between the two is allowed; text around them is not
/// inspected.
///
/// When nothing follows the run, its last character is the unit, so a bare
/// `12` reads as `1` of unit `2` and fails unit lookup instead of passing
/// as a unit-less number.
pub(crate) fn scan_quantity(text: &str) -> Option<Quantity<'_>> {
    let start = text.find(|c: char| c.is_ascii_digit() || c == '.')?;
    let rest = &text[start..];
    let run_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    let run = &rest[..run_len];

    let after = rest[run_len..].trim_start();
    let unit_len = after.find(char::is_whitespace).unwrap_or(after.len());
    if unit_len > 0 {
        return Some(Quantity {
            amount: leading_float(run)?,
            unit: &after[..unit_len],
        });
    }

    // Run is ASCII, so the last character is one byte.
    let split = run_len.checked_sub(1).filter(|&split| split > 0)?;
    Some(Quantity {
        amount: leading_float(&run[..split])?,
        unit: &run[split..],
    })
}

/// Shared sanitize step for unit-table types (distance, mass).
pub(crate) fn sanitize_measure(
    type_name: &'static str,
    table: &UnitTable,
    raw: &str,
) -> Result<Value> {
    let quantity = scan_quantity(raw).ok_or_else(|| CriteriaError::ParseMismatch {
        type_name,
        input: raw.to_string(),
    })?;
    Ok(Value::Number(table.to_base(quantity.amount, quantity.unit)?))
}
