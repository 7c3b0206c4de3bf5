//! Common style types.

pub mod color;

pub use color::RGBColor;
