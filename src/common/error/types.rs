//! Unified error types for deckwright.
//!
//! This module provides a unified error type that covers deck validation, deck
//! file loading, package generation and output I/O.
use thiserror::Error;

/// Main error type for deckwright operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Package or part generation failed
    #[error("OOXML error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// A slide specification is malformed
    #[error("Slide {slide}: {message}")]
    InvalidSlide { slide: usize, message: String },

    /// Deck file could not be parsed
    #[error("Deck file error: {0}")]
    Yaml(String),

    /// Color string is not six hex digits
    #[error("Invalid color '{0}': expected six hex digits such as 0C0C0E")]
    InvalidColor(String),

    /// Deck-wide settings (page size, theme) are unusable
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
}

impl Error {
    /// Build an [`Error::InvalidSlide`] for the slide at a 1-based position.
    pub fn invalid_slide(slide: usize, message: impl Into<String>) -> Self {
        Error::InvalidSlide {
            slide,
            message: message.into(),
        }
    }
}

/// Result type for deckwright operations.
pub type Result<T> = std::result::Result<T, Error>;
