//! `color`: six hex digits in, background color out.
//!
//! The canonical value holds the color's HSL components, each scaled to a
//! byte and rounded up, packed as `0xHHSSLL`. Presenting unpacks those bytes
//! as HSL and converts back to RGB, so quantization can shift a channel by
//! one (`ff0000` displays as `ff0101`).

use std::sync::LazyLock;

use regex::Regex;

use crate::conversion::color::{hsl_to_rgb, pack_hsl, rgb_hex, rgb_to_hsl, unpack, unpack_hsl};
use crate::error::{CriteriaError, Result};
use crate::render::RenderTarget;
use crate::value::Value;

use super::{Criteria, kind_mismatch};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-f0-9]{6}$").expect("Invalid hex color regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorCriteria;

impl ColorCriteria {
    /// RGB hex digits (no `#`) that a packed value presents as.
    pub fn display_hex(packed: u32) -> String {
        let [h, s, l] = unpack_hsl(packed);
        rgb_hex(hsl_to_rgb(h, s, l))
    }

    fn mismatch(raw: &str) -> CriteriaError {
        CriteriaError::ParseMismatch {
            type_name: "color",
            input: raw.to_string(),
        }
    }
}

impl Criteria for ColorCriteria {
    fn type_name(&self) -> &'static str {
        "color"
    }

    fn description(&self) -> &'static str {
        "Six hex digits, e.g. 336699"
    }

    fn sanitize(&self, raw: &str) -> Result<Value> {
        if !HEX_COLOR.is_match(raw) {
            return Err(Self::mismatch(raw));
        }
        let rgb = u32::from_str_radix(raw, 16).map_err(|_| Self::mismatch(raw))?;
        let [r, g, b] = unpack(rgb);
        Ok(Value::Color(pack_hsl(rgb_to_hsl(r, g, b))))
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let Value::Color(packed) = value else {
            return Err(kind_mismatch(self.type_name(), value));
        };
        target.set_background_color(&format!("#{}", Self::display_hex(*packed)));
        Ok(())
    }
}
