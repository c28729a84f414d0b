//! `distance`: a number and a unit, stored in meters.

use crate::conversion::number::to_fixed0;
use crate::conversion::units::DISTANCE_UNITS;
use crate::error::Result;
use crate::render::RenderTarget;
use crate::value::Value;

use super::quantity::sanitize_measure;
use super::{Criteria, expect_number};

#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceCriteria;

impl DistanceCriteria {
    /// Display text for a distance in meters.
    ///
    /// Picks `km` above 2000 m, `m` above 1 m and `cm` above 1 cm. Anything
    /// smaller (including zero and negatives) is shown unscaled with no unit.
    pub fn display(meters: f64) -> String {
        let (scaled, unit) = if meters > 2000.0 {
            (meters / 1000.0, "km")
        } else if meters > 1.0 {
            (meters, "m")
        } else if meters > 0.01 {
            (meters * 100.0, "cm")
        } else {
            (meters, "")
        };
        format!("{}{unit}", to_fixed0(scaled))
    }
}

impl Criteria for DistanceCriteria {
    fn type_name(&self) -> &'static str {
        "distance"
    }

    fn description(&self) -> &'static str {
        "Number and unit, stored in meters"
    }

    fn sanitize(&self, raw: &str) -> Result<Value> {
        sanitize_measure(self.type_name(), &DISTANCE_UNITS, raw)
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let meters = expect_number(self.type_name(), value)?;
        target.set_text(&Self::display(meters));
        Ok(())
    }
}
