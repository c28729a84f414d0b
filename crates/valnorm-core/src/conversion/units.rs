//! Unit conversion tables for distance (meters) and mass (grams).

use crate::error::{CriteriaError, Result};

/// A static table of unit token to base-unit factor.
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    domain: &'static str,
    base_unit: &'static str,
    factors: &'static [(&'static str, f64)],
}

impl UnitTable {
    /// Name of the measured quantity, e.g. "distance".
    pub const fn domain(&self) -> &'static str {
        self.domain
    }

    /// Token of the base unit every value is converted to.
    pub const fn base_unit(&self) -> &'static str {
        self.base_unit
    }

    /// Factor that converts one `unit` into the base unit.
    ///
    /// Lookup is exact and case-sensitive.
    pub fn factor(&self, unit: &str) -> Result<f64> {
        self.factors
            .iter()
            .find(|(token, _)| *token == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| CriteriaError::UnknownUnit {
                domain: self.domain,
                unit: unit.to_string(),
            })
    }

    /// Converts `amount` of `unit` into the base unit.
    pub fn to_base(&self, amount: f64, unit: &str) -> Result<f64> {
        Ok(amount * self.factor(unit)?)
    }

    /// All unit tokens in table order.
    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factors.iter().map(|(token, _)| *token)
    }
}

/// Distance units, base meters.
pub static DISTANCE_UNITS: UnitTable = UnitTable {
    domain: "distance",
    base_unit: "m",
    factors: &[
        ("cm", 0.01),
        ("feet", 0.3048),
        ("km", 1000.0),
        // English league, 5.556 km
        ("leagues", 5556.0),
        ("m", 1.0),
        ("meters", 1.0),
        ("miles", 1609.344),
    ],
};

/// Mass units, base grams.
pub static MASS_UNITS: UnitTable = UnitTable {
    domain: "mass",
    base_unit: "g",
    factors: &[("g", 1.0), ("kg", 1000.0), ("lb", 453.5924)],
};
