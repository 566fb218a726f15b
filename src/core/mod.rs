//! Core value types: cards, the deck, and the deal configuration.
//!
//! Everything here is plain immutable data; the enumeration logic lives in
//! `deal` and the text output in `render`.

pub mod card;
pub mod config;

pub use card::{Card, Deck};
pub use config::{DealConfig, Quota};
