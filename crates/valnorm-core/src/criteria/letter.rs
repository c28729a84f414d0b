//! `letter`: the first character, upper-cased, stored as its code point.

use crate::error::{CriteriaError, Result};
use crate::render::RenderTarget;
use crate::value::Value;

use super::{Criteria, kind_mismatch};

#[derive(Debug, Clone, Copy, Default)]
pub struct LetterCriteria;

impl Criteria for LetterCriteria {
    fn type_name(&self) -> &'static str {
        "letter"
    }

    fn description(&self) -> &'static str {
        "First character, upper-cased"
    }

    fn sanitize(&self, raw: &str) -> Result<Value> {
        raw.to_uppercase()
            .chars()
            .next()
            .map(|c| Value::CharCode(u32::from(c)))
            .ok_or_else(|| CriteriaError::ParseMismatch {
                type_name: self.type_name(),
                input: raw.to_string(),
            })
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let Value::CharCode(code) = value else {
            return Err(kind_mismatch(self.type_name(), value));
        };
        let letter = char::from_u32(*code).unwrap_or(char::REPLACEMENT_CHARACTER);
        target.set_text(letter.encode_utf8(&mut [0; 4]));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rendered;

    fn present(code: u32) -> String {
        let mut rendered = Rendered::new();
        LetterCriteria
            .present(&Value::CharCode(code), &mut rendered)
            .unwrap();
        rendered.text.unwrap()
    }

    #[test]
    fn test_sanitize_upper_cases_first_char() {
        assert_eq!(LetterCriteria.sanitize("a"), Ok(Value::CharCode(65)));
        assert_eq!(LetterCriteria.sanitize("zebra"), Ok(Value::CharCode(90)));
        assert_eq!(LetterCriteria.sanitize("é"), Ok(Value::CharCode(0xC9)));
        // upper-casing happens before the first char is taken
        assert_eq!(LetterCriteria.sanitize("ß"), Ok(Value::CharCode(83)));
    }

    #[test]
    fn test_sanitize_empty() {
        assert!(matches!(
            LetterCriteria.sanitize(""),
            Err(CriteriaError::ParseMismatch {
                type_name: "letter",
                ..
            })
        ));
    }

    #[test]
    fn test_present() {
        assert_eq!(present(65), "A");
        assert_eq!(present(0xC9), "É");
        assert_eq!(present(0xD800), "\u{FFFD}");
    }
}
