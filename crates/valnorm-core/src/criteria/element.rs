//! `element`: whole-string numeric coercion.

use tracing::warn;

use crate::conversion::number::{coerce_number, js_number_string};
use crate::error::Result;
use crate::render::RenderTarget;
use crate::value::Value;

use super::{Criteria, expect_number};

#[derive(Debug, Clone, Copy, Default)]
pub struct ElementCriteria;

impl Criteria for ElementCriteria {
    fn type_name(&self) -> &'static str {
        "element"
    }

    fn description(&self) -> &'static str {
        "Number; non-numeric text becomes NaN"
    }

    fn sanitize(&self, raw: &str) -> Result<Value> {
        let n = coerce_number(raw);
        if n.is_nan() {
            warn!("element text is not numeric, stored as NaN");
        }
        Ok(Value::Number(n))
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let n = expect_number(self.type_name(), value)?;
        target.set_text(&js_number_string(n));
        Ok(())
    }
}
