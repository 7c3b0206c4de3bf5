//! PowerPoint (.pptx) presentation writing.
//!
//! This module builds Microsoft PowerPoint presentations in the Office Open XML
//! (OOXML) format:
//!
//! - `MutablePresentation`: the presentation being built, with its slides
//! - `MutableSlide` / `MutableShape`: slide content (text boxes, rectangles)
//! - `Paragraph` / `Run`: formatted text inside a text box
//! - `package`: assembly of all parts into an OPC package
//! - `template`: the master, layout, theme and property parts every package needs
//!
//! # Example
//!
//! ```rust
//! use deckwright::common::RGBColor;
//! use deckwright::ooxml::pptx::{Alignment, Frame, MutablePresentation, Paragraph, TextFormat};
//!
//! let format = TextFormat::new("Georgia", 24.0, RGBColor::new(0xFF, 0xFF, 0xFF));
//! let mut pres = MutablePresentation::new();
//! pres.add_slide().add_text_box(
//!     Frame::new(914_400, 914_400, 4_572_000, 914_400),
//!     Paragraph::with_run("Hello", format).align(Alignment::Center),
//! );
//!
//! let bytes = pres.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), deckwright::ooxml::OoxmlError>(())
//! ```

pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use format::{Alignment, Frame, Outline, TextFormat};
pub use writer::{
    Bullet, MutablePresentation, MutableShape, MutableSlide, Paragraph, Run,
};
