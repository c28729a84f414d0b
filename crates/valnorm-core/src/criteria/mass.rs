//! `mass`: a number and a unit, stored in grams.

use crate::conversion::number::to_fixed0;
use crate::conversion::units::MASS_UNITS;
use crate::error::Result;
use crate::render::RenderTarget;
use crate::value::Value;

use super::quantity::sanitize_measure;
use super::{Criteria, expect_number};

#[derive(Debug, Clone, Copy, Default)]
pub struct MassCriteria;

impl MassCriteria {
    /// Display text for a mass in grams: `kg` above 2000 g, otherwise `g`.
    pub fn display(grams: f64) -> String {
        if grams > 2000.0 {
            format!("{}kg", to_fixed0(grams / 1000.0))
        } else {
            format!("{}g", to_fixed0(grams))
        }
    }
}

impl Criteria for MassCriteria {
    fn type_name(&self) -> &'static str {
        "mass"
    }

    fn description(&self) -> &'static str {
        "Number and unit, stored in grams"
    }

    fn sanitize(&self, raw: &str) -> Result<Value> {
        sanitize_measure(self.type_name(), &MASS_UNITS, raw)
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let grams = expect_number(self.type_name(), value)?;
        target.set_text(&Self::display(grams));
        Ok(())
    }
}
