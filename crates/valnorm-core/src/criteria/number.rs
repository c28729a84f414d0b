//! `number`: values are kept as given and only presented.

use crate::conversion::number::js_number_string;
use crate::error::Result;
use crate::render::RenderTarget;
use crate::value::Value;

use super::{Criteria, kind_mismatch};

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCriteria;

impl Criteria for NumberCriteria {
    fn type_name(&self) -> &'static str {
        "number"
    }

    fn description(&self) -> &'static str {
        "Plain number, left as given"
    }

    fn sanitizes(&self) -> bool {
        false
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        match value {
            Value::Text(text) => target.set_text(text),
            Value::Number(n) => target.set_text(&js_number_string(*n)),
            other => return Err(kind_mismatch(self.type_name(), other)),
        }
        Ok(())
    }
}
