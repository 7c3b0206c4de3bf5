//! Common types and utilities shared across the crate.
//!
//! Colors, unit conversion, XML escaping and the unified error type.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;

