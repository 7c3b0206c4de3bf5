//! Deck theme: palette, fonts and footer brand mark.

use crate::common::xml::find_invalid_xml_char;
use crate::common::{Error, RGBColor, Result};
use serde::{Deserialize, Serialize};

/// Named colors applied uniformly across a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Slide background
    pub background: RGBColor,
    /// Dividers, accent bar and code block outlines
    pub border: RGBColor,
    /// Body text and top-level bullets
    pub body: RGBColor,
    /// Labels, captions, sub-bullets and footers
    pub secondary: RGBColor,
    /// Headings and callouts
    pub accent: RGBColor,
    /// Code block fill
    pub code_background: RGBColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: RGBColor::new(0x0C, 0x0C, 0x0E),
            border: RGBColor::new(0x2E, 0x2F, 0x37),
            body: RGBColor::new(0xED, 0xEE, 0xF0),
            secondary: RGBColor::new(0x8B, 0x8D, 0x98),
            accent: RGBColor::new(0xFF, 0xFF, 0xFF),
            code_background: RGBColor::new(0x18, 0x19, 0x1B),
        }
    }
}

/// Font families by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fonts {
    /// Headings and the brand mark
    pub display: String,
    /// Body text, labels and bullets
    pub body: String,
    /// Code blocks
    pub code: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            display: "Georgia".to_string(),
            body: "Helvetica Neue".to_string(),
            code: "Menlo".to_string(),
        }
    }
}

/// The colors, fonts and brand mark used for one render.
///
/// A theme is an immutable value handed to the renderer. Every field has a
/// default, so a deck file only needs to name the values it overrides:
///
/// ```rust
/// use deckwright::deck::Theme;
///
/// let theme: Theme = serde_saphyr::from_str("palette:\n  accent: \"#FFD60A\"\n").unwrap();
/// assert_eq!(theme.palette.accent.to_hex(), "FFD60A");
/// assert_eq!(theme.fonts.display, "Georgia");
/// assert_eq!(theme.brand, "Resend");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub palette: Palette,
    pub fonts: Fonts,
    /// Text of the footer brand mark
    pub brand: String,
}

impl Theme {
    /// Reject brand or font names that cannot be written into XML.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("brand", &self.brand),
            ("fonts.display", &self.fonts.display),
            ("fonts.body", &self.fonts.body),
            ("fonts.code", &self.fonts.code),
        ];
        for (field, value) in fields {
            if let Some(c) = find_invalid_xml_char(value) {
                return Err(Error::InvalidDeck(format!(
                    "theme `{}` contains control character U+{:04X}",
                    field,
                    u32::from(c)
                )));
            }
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            fonts: Fonts::default(),
            brand: "Resend".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.background.to_hex(), "0C0C0E");
        assert_eq!(palette.border.to_hex(), "2E2F37");
        assert_eq!(palette.secondary.to_hex(), "8B8D98");
        assert_eq!(palette.code_background.to_hex(), "18191B");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let yaml = "brand: Acme\nfonts:\n  code: JetBrains Mono\n";
        let theme: Theme = serde_saphyr::from_str(yaml).unwrap();

        assert_eq!(theme.brand, "Acme");
        assert_eq!(theme.fonts.code, "JetBrains Mono");
        assert_eq!(theme.fonts.body, "Helvetica Neue");
        assert_eq!(theme.palette, Palette::default());
    }

    #[test]
    fn test_control_character_in_font_rejected() {
        assert!(Theme::default().validate().is_ok());

        let mut theme = Theme::default();
        theme.fonts.code = "Menlo\u{0}".to_string();
        let err = theme.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid deck: theme `fonts.code` contains control character U+0000"
        );
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result: std::result::Result<Theme, _> = serde_saphyr::from_str("palette:\n  body: nope\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: std::result::Result<Theme, _> = serde_saphyr::from_str("palete: {}\n");
        assert!(result.is_err());
    }
}
