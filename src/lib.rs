//! Deckwright - template and data driven slide decks written as PowerPoint files
//!
//! This library renders an ordered list of slide descriptions into an Office
//! Open XML presentation (.pptx). Every kind of slide maps to a fixed
//! composition of drawing primitives, styled by a theme.
//!
//! # Features
//!
//! - **Slide kinds**: title, bullet list, code block, two-column code and closing slides
//! - **Themes**: palette, fonts and footer brand mark, overridable from YAML
//! - **Deck files**: load decks from YAML with fail-fast validation
//! - **PPTX writer**: in-memory presentation model serialized to PresentationML
//! - **Reproducible output**: the same deck always produces the same bytes
//!
//! # Example - Rendering the demo deck
//!
//! ```no_run
//! use deckwright::deck::{build, demo_deck, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = build(&demo_deck(), &Theme::default())?;
//! pres.save("resend-invoice-demo.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Loading a deck file
//!
//! ```no_run
//! use deckwright::deck::{render, DeckFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = DeckFile::load("deck.yaml")?;
//! let bytes = render(&file.deck, &file.theme)?;
//! std::fs::write("deck.pptx", bytes)?;
//! # Ok(())
//! # }
//! ```

/// Shared types: colors, units, XML escaping and the unified error type
pub mod common;

/// Slide specifications, themes, primitives and the deck renderer
pub mod deck;

/// OOXML (Office Open XML) writer
///
/// This module provides the OPC packaging layer and the PresentationML
/// writer used by the renderer.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, RGBColor, Result};
pub use deck::{Deck, DeckFile, SlideSpec, Theme, build, demo_deck, render};
pub use ooxml::pptx::MutablePresentation;
