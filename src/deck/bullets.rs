//! Bullet item classification.
//!
//! A bullet list is written as plain strings. An item that starts with two
//! spaces is nested under the previous top-level item.

use crate::common::unit::inches;

/// Marker that turns an item into a sub-bullet.
pub const SUB_BULLET_PREFIX: &str = "  ";

/// Nesting level of a bullet item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletLevel {
    Top,
    Sub,
}

impl BulletLevel {
    /// DrawingML outline level (`lvl`).
    pub fn outline_level(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Sub => 1,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Top => '•',
            Self::Sub => '→',
        }
    }

    /// Space before the paragraph, in points.
    pub fn space_before(self) -> f64 {
        match self {
            Self::Top => 7.0,
            Self::Sub => 3.0,
        }
    }

    /// Font size for an item of this level in a list of `base` points.
    pub fn font_size(self, base: f64) -> f64 {
        match self {
            Self::Top => base,
            Self::Sub => base - 2.0,
        }
    }

    /// Left margin and hanging indent, in EMU.
    pub fn indentation(self) -> (i64, i64) {
        let hang = inches(0.3125);
        match self {
            Self::Top => (hang, -hang),
            Self::Sub => (hang * 2, -hang),
        }
    }
}

/// A classified bullet item borrowing its text from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletItem<'a> {
    pub level: BulletLevel,
    pub text: &'a str,
}

impl<'a> BulletItem<'a> {
    /// Classify an item and strip its leading whitespace.
    pub fn parse(item: &'a str) -> Self {
        let level = if item.starts_with(SUB_BULLET_PREFIX) {
            BulletLevel::Sub
        } else {
            BulletLevel::Top
        };
        Self {
            level,
            text: item.trim_start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_spaces_make_a_sub_bullet() {
        let item = BulletItem::parse("  Validate input → Generate PDF");
        assert_eq!(item.level, BulletLevel::Sub);
        assert_eq!(item.text, "Validate input → Generate PDF");
    }

    #[test]
    fn test_single_space_is_top_level() {
        let item = BulletItem::parse(" almost nested");
        assert_eq!(item.level, BulletLevel::Top);
        assert_eq!(item.text, "almost nested");
    }

    #[test]
    fn test_deeper_indent_is_still_one_level() {
        let item = BulletItem::parse("      deep");
        assert_eq!(item.level, BulletLevel::Sub);
        assert_eq!(item.level.outline_level(), 1);
        assert_eq!(item.text, "deep");
    }

    #[test]
    fn test_level_styles() {
        assert_eq!(BulletLevel::Top.glyph(), '•');
        assert_eq!(BulletLevel::Sub.glyph(), '→');
        assert_eq!(BulletLevel::Top.font_size(16.0), 16.0);
        assert_eq!(BulletLevel::Sub.font_size(16.0), 14.0);
        assert_eq!(BulletLevel::Sub.space_before(), 3.0);
        assert_eq!(BulletLevel::Top.indentation(), (285_750, -285_750));
    }
}
