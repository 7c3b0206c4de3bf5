//! Page geometry shared by the slide compositions.
//!
//! Distances are given in inches and converted to EMU against the page
//! size of the deck being rendered.

use crate::common::unit::{inches, scale_emu};
use crate::ooxml::pptx::Frame;

use super::spec::PageSize;

/// Horizontal page padding.
pub const PAD: f64 = 0.75;
pub const DIVIDER_HEIGHT: f64 = 0.012;
pub const ACCENT_BAR_HEIGHT: f64 = 0.045;

pub const LABEL_TOP: f64 = 0.38;
pub const LABEL_WIDTH: f64 = 5.0;
pub const LABEL_HEIGHT: f64 = 0.32;

pub const HEADING_TOP: f64 = 0.72;
pub const HEADING_HEIGHT: f64 = 0.92;
/// Offset of the heading divider below the heading top.
pub const HEADING_RULE_OFFSET: f64 = 0.88;

pub const BODY_TOP: f64 = 1.82;
pub const BODY_HEIGHT: f64 = 4.8;

pub const CODE_TOP: f64 = 1.72;
pub const CODE_HEIGHT: f64 = 4.3;
pub const CODE_INSET_X: f64 = 0.22;
pub const CODE_INSET_Y: f64 = 0.18;
pub const CAPTION_TOP: f64 = 6.15;
pub const CAPTION_HEIGHT: f64 = 0.38;

pub const COLUMN_CAPTION_TOP: f64 = 1.72;
pub const COLUMN_CAPTION_HEIGHT: f64 = 0.32;
pub const COLUMN_CODE_TOP: f64 = 2.08;
pub const LEFT_COLUMN_HEIGHT: f64 = 4.1;
pub const RIGHT_COLUMN_HEIGHT: f64 = 2.6;

pub const CLOSING_LIST_HEIGHT: f64 = 2.9;
pub const FOLLOW_UP_HEADING_TOP: f64 = 4.6;
pub const FOLLOW_UP_HEADING_HEIGHT: f64 = 0.42;
pub const FOLLOW_UP_TOP: f64 = 5.05;
pub const FOLLOW_UP_HEIGHT: f64 = 1.8;

/// Distance of the footer top from the bottom edge.
pub const FOOTER_RISE: f64 = 0.42;
pub const FOOTER_HEIGHT: f64 = 0.32;
pub const BRAND_LEFT: f64 = 0.5;
pub const BRAND_WIDTH: f64 = 1.8;
/// Distance of the page number box from the right edge.
pub const PAGE_NUMBER_INSET: f64 = 1.6;
pub const PAGE_NUMBER_WIDTH: f64 = 1.4;

// Title slide rows, as fractions of the page height
pub const TITLE_ROW: f64 = 0.22;
pub const SUBTITLE_ROW: f64 = 0.52;
pub const TITLE_RULE_ROW: f64 = 0.68;
pub const BYLINE_ROW: f64 = 0.73;
pub const TITLE_HEIGHT: f64 = 1.7;
pub const SUBTITLE_HEIGHT: f64 = 0.8;
pub const BYLINE_HEIGHT: f64 = 0.5;

/// Page geometry in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: i64,
    pub height: i64,
}

impl Layout {
    pub fn new(page: PageSize) -> Self {
        Self {
            width: page.width,
            height: page.height,
        }
    }

    pub fn pad(&self) -> i64 {
        inches(PAD)
    }

    /// Width between the left and right padding.
    pub fn content_width(&self) -> i64 {
        self.width - 2 * self.pad()
    }

    /// Width of one column in a two-column slide.
    pub fn column_width(&self) -> i64 {
        (self.width - 3 * self.pad()) / 2
    }

    /// Left edge of the right-hand column.
    pub fn right_column_left(&self) -> i64 {
        2 * self.pad() + self.column_width()
    }

    /// Full content-width frame starting at `top` inches.
    pub fn content_frame(&self, top: f64, height: f64) -> Frame {
        Frame::new(self.pad(), inches(top), self.content_width(), inches(height))
    }

    /// Position at a fraction of the page height.
    pub fn row(&self, fraction: f64) -> i64 {
        scale_emu(self.height, fraction)
    }

    pub fn footer_top(&self) -> i64 {
        self.height - inches(FOOTER_RISE)
    }
}
