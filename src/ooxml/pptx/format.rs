//! Format types for PPTX presentations.

use crate::common::RGBColor;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Value of the DrawingML `algn` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Text formatting properties for a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    /// Create a format with font, size and color set.
    pub fn new(font: &str, size: f64, color: RGBColor) -> Self {
        Self {
            font: Some(font.to_string()),
            size: Some(size),
            color: Some(color),
            ..Default::default()
        }
    }

    /// Builder method: set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }
}

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the frame by a horizontal and vertical inset on every side.
    pub fn inset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - dx * 2,
            height: self.height - dy * 2,
        }
    }
}

/// Shape outline (line) properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub color: RGBColor,
    /// Line width in EMU
    pub width: i64,
}
