//! Office Open XML (OOXML) writer.
//!
//! This module produces PresentationML (.pptx) packages.
//!
//! # Architecture
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): Low-level package handling (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): The mutable presentation model and its part writers
//!
//! # Example
//!
//! ```rust
//! use deckwright::ooxml::pptx::{Frame, MutablePresentation, Paragraph, TextFormat};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide().add_text_box(
//!     Frame::new(914400, 914400, 4572000, 914400),
//!     Paragraph::with_run("Hello", TextFormat::default()),
//! );
//! let bytes = pres.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), deckwright::ooxml::error::OoxmlError>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result};
