//! Slide specifications and the deck that orders them.

use crate::common::unit::inches;
use crate::common::xml::find_invalid_xml_char;
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

use super::layout::{self, Layout};

/// One column of a two-column code slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodePanel {
    pub caption: String,
    pub code: String,
    /// Height of the code block in inches; each column has its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl CodePanel {
    /// Exclusive lower and inclusive upper bound of `height`; a panel must be
    /// taller than its top and bottom insets.
    pub const HEIGHT_RANGE: (f64, f64) = (2.0 * layout::CODE_INSET_Y, 56.0);

    pub fn new(caption: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            code: code.into(),
            height: None,
        }
    }
}

/// Content of a single slide, tagged by kind.
///
/// In a deck file the tag is the `kind` key:
///
/// ```yaml
/// - kind: bullets
///   label: "01  OVERVIEW"
///   heading: What I Built
///   items:
///     - A service that sends invoice emails
///     - "  Validate input → Generate PDF"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideSpec {
    Title {
        title: String,
        subtitle: String,
        byline: String,
    },
    Bullets {
        label: String,
        heading: String,
        items: Vec<String>,
    },
    Code {
        label: String,
        heading: String,
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    TwoColumnCode {
        label: String,
        heading: String,
        left: CodePanel,
        right: CodePanel,
    },
    Closing {
        label: String,
        heading: String,
        items: Vec<String>,
        follow_up_heading: String,
        follow_up: Vec<String>,
    },
}

impl SlideSpec {
    /// Name of the variant as written in deck files.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Bullets { .. } => "bullets",
            Self::Code { .. } => "code",
            Self::TwoColumnCode { .. } => "two_column_code",
            Self::Closing { .. } => "closing",
        }
    }

    /// Check the slide at 1-based position `slide` for content that would
    /// render as an empty or broken page.
    pub fn validate(&self, slide: usize) -> Result<()> {
        let chars = |field: &str, value: &str| -> Result<()> {
            match find_invalid_xml_char(value) {
                Some(c) => Err(Error::invalid_slide(
                    slide,
                    format!(
                        "{} slide: `{}` contains control character U+{:04X}",
                        self.kind(),
                        field,
                        u32::from(c)
                    ),
                )),
                None => Ok(()),
            }
        };
        let text = |field: &str, value: &str| -> Result<()> {
            if value.trim().is_empty() {
                return Err(Error::invalid_slide(
                    slide,
                    format!("{} slide: `{}` must not be blank", self.kind(), field),
                ));
            }
            chars(field, value)
        };
        let list = |field: &str, items: &[String]| -> Result<()> {
            if items.is_empty() {
                return Err(Error::invalid_slide(
                    slide,
                    format!("{} slide: `{}` must have at least one item", self.kind(), field),
                ));
            }
            for (i, item) in items.iter().enumerate() {
                text(&format!("{}[{}]", field, i), item)?;
            }
            Ok(())
        };
        let code = |field: &str, value: &str| -> Result<()> {
            if value.is_empty() {
                return Err(Error::invalid_slide(
                    slide,
                    format!("{} slide: `{}` must not be empty", self.kind(), field),
                ));
            }
            chars(field, value)
        };

        match self {
            Self::Title {
                title,
                subtitle,
                byline,
            } => {
                text("title", title)?;
                text("subtitle", subtitle)?;
                text("byline", byline)?;
            },
            Self::Bullets {
                label,
                heading,
                items,
            } => {
                text("label", label)?;
                text("heading", heading)?;
                list("items", items)?;
            },
            Self::Code {
                label,
                heading,
                code: source,
                caption,
            } => {
                text("label", label)?;
                text("heading", heading)?;
                code("code", source)?;
                if let Some(caption) = caption {
                    text("caption", caption)?;
                }
            },
            Self::TwoColumnCode {
                label,
                heading,
                left,
                right,
            } => {
                text("label", label)?;
                text("heading", heading)?;
                for (side, panel) in [("left", left), ("right", right)] {
                    text(&format!("{}.caption", side), &panel.caption)?;
                    code(&format!("{}.code", side), &panel.code)?;
                    let (min, max) = CodePanel::HEIGHT_RANGE;
                    if panel.height.is_some_and(|h| !(h > min && h <= max)) {
                        return Err(Error::invalid_slide(
                            slide,
                            format!(
                                "{} slide: `{}.height` must be over {} and at most {} inches",
                                self.kind(),
                                side,
                                min,
                                max
                            ),
                        ));
                    }
                }
            },
            Self::Closing {
                label,
                heading,
                items,
                follow_up_heading,
                follow_up,
            } => {
                text("label", label)?;
                text("heading", heading)?;
                list("items", items)?;
                text("follow_up_heading", follow_up_heading)?;
                list("follow_up", follow_up)?;
            },
        }
        Ok(())
    }
}

/// Slide dimensions in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: i64,
    pub height: i64,
}

impl PageSize {
    /// 16:9 widescreen, 13.33" x 7.5".
    pub const WIDESCREEN: PageSize = PageSize {
        width: 12_188_952,
        height: 6_858_000,
    };

    /// Smallest side PowerPoint accepts for `p:sldSz`, 1".
    pub const MIN_SIDE: i64 = 914_400;
    /// Largest side PowerPoint accepts for `p:sldSz`, 56".
    pub const MAX_SIDE: i64 = 51_206_400;

    pub fn from_inches(width: f64, height: f64) -> Self {
        Self {
            width: inches(width),
            height: inches(height),
        }
    }

    /// Check that both sides are within the `p:sldSz` range and that the
    /// page is wide enough for two padded code columns.
    pub fn validate(&self) -> Result<()> {
        for (side, value) in [("width", self.width), ("height", self.height)] {
            if !(Self::MIN_SIDE..=Self::MAX_SIDE).contains(&value) {
                return Err(Error::InvalidDeck(format!(
                    "page {} {} EMU is outside {}..={} EMU",
                    side,
                    value,
                    Self::MIN_SIDE,
                    Self::MAX_SIDE
                )));
            }
        }
        if Layout::new(*self).column_width() <= 2 * inches(layout::CODE_INSET_X) {
            return Err(Error::InvalidDeck(format!(
                "page width {} EMU leaves no room for two code columns",
                self.width
            )));
        }
        Ok(())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

/// An ordered sequence of slides and the page they are drawn on.
///
/// Position in the sequence is the slide's page number; the total shown in
/// every footer is [`Deck::len`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    slides: Vec<SlideSpec>,
    page: PageSize,
}

impl Deck {
    /// Create a deck on the default widescreen page.
    pub fn new(slides: Vec<SlideSpec>) -> Self {
        Self {
            slides,
            page: PageSize::default(),
        }
    }

    pub fn with_page(mut self, page: PageSize) -> Self {
        self.page = page;
        self
    }

    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    /// Total number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Validate the page and every slide, stopping at the first malformed one.
    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;
        self.slides
            .iter()
            .enumerate()
            .try_for_each(|(i, slide)| slide.validate(i + 1))
    }

    /// Title of the first title slide, used as the document title.
    pub fn title(&self) -> Option<&str> {
        self.slides.iter().find_map(|slide| match slide {
            SlideSpec::Title { title, .. } => Some(title.as_str()),
            _ => None,
        })
    }
}
