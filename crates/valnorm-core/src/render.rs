//! Render targets for presented values.

use serde::{Deserialize, Serialize};

/// Anything a criteria can present a value onto.
///
/// A criteria writes exactly one of the two properties: colors set the
/// background color, every other type sets the text.
pub trait RenderTarget {
    fn set_text(&mut self, text: &str);

    /// Sets a CSS-style color such as `#ff0101`.
    fn set_background_color(&mut self, color: &str);
}

/// A render target that records what was written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text if set, otherwise the background color.
    pub fn display(&self) -> &str {
        self.text
            .as_deref()
            .or(self.background_color.as_deref())
            .unwrap_or("")
    }
}

impl RenderTarget for Rendered {
    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn set_background_color(&mut self, color: &str) {
        self.background_color = Some(color.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefers_text() {
        let mut rendered = Rendered::new();
        assert_eq!(rendered.display(), "");

        rendered.set_background_color("#ff0101");
        assert_eq!(rendered.display(), "#ff0101");

        rendered.set_text("12km");
        assert_eq!(rendered.display(), "12km");
    }
}
