//! Template and data driven slide decks.
//!
//! A [`Deck`] is an ordered list of [`SlideSpec`]s. Each kind of slide has a
//! fixed composition of drawing primitives, styled by a [`Theme`], and the
//! renderer turns the whole deck into a .pptx package.
//!
//! # Example
//!
//! ```rust
//! use deckwright::deck::{render, Deck, SlideSpec, Theme};
//!
//! let deck = Deck::new(vec![
//!     SlideSpec::Title {
//!         title: "Demo".to_string(),
//!         subtitle: "A two slide deck".to_string(),
//!         byline: "Built by: me".to_string(),
//!     },
//!     SlideSpec::Bullets {
//!         label: "01  OVERVIEW".to_string(),
//!         heading: "Points".to_string(),
//!         items: vec!["a".to_string(), "  b".to_string()],
//!     },
//! ]);
//!
//! let bytes = render(&deck, &Theme::default())?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), deckwright::Error>(())
//! ```

pub mod bullets;
pub mod demo;
pub mod file;
pub mod layout;
pub mod primitives;
pub mod render;
pub mod spec;
pub mod theme;

pub use bullets::{BulletItem, BulletLevel};
pub use demo::demo_deck;
pub use file::DeckFile;
pub use layout::Layout;
pub use primitives::Canvas;
pub use render::{build, render};
pub use spec::{CodePanel, Deck, PageSize, SlideSpec};
pub use theme::{Fonts, Palette, Theme};
