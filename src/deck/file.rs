//! YAML deck files.
//!
//! A deck file holds the slides, and optionally the page size in inches and
//! theme overrides:
//!
//! ```yaml
//! page:
//!   width: 13.33
//!   height: 7.5
//! theme:
//!   brand: Acme
//! slides:
//!   - kind: title
//!     title: Demo
//!     subtitle: A short deck
//!     byline: Built by me
//! ```

use crate::common::Result;
use serde::Deserialize;
use std::path::Path;

use super::spec::{Deck, PageSize, SlideSpec};
use super::theme::Theme;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageInches {
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeckFile {
    #[serde(default)]
    page: Option<PageInches>,
    #[serde(default)]
    theme: Theme,
    slides: Vec<SlideSpec>,
}

/// A deck and theme loaded from a YAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckFile {
    pub deck: Deck,
    pub theme: Theme,
}

impl DeckFile {
    /// Parse and validate a deck file.
    ///
    /// ```rust
    /// use deckwright::deck::DeckFile;
    ///
    /// let file = DeckFile::from_yaml("slides:\n  - kind: bullets\n    label: L\n    heading: H\n    items: [a, '  b']\n")?;
    /// assert_eq!(file.deck.len(), 1);
    /// # Ok::<(), deckwright::Error>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self> {
        let raw: RawDeckFile = serde_saphyr::from_str(source)?;

        let mut deck = Deck::new(raw.slides);
        if let Some(page) = raw.page {
            deck = deck.with_page(PageSize::from_inches(page.width, page.height));
        }
        raw.theme.validate()?;
        deck.validate()?;

        Ok(Self {
            deck,
            theme: raw.theme,
        })
    }

    /// Read, parse and validate a deck file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded deck file {}", path.as_ref().display());
        Self::from_yaml(&source)
    }
}
