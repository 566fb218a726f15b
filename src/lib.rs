//! # deal-worlds
//!
//! Enumerates every way to deal a fixed deck of distinct cards to named
//! participants with exact quotas, then renders the result as an Alloy
//! partial instance: a `one sig` declaration naming each world, plus one
//! holds line per world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: For a fixed deck and quota list, worlds are
//!    enumerated in a fixed, reproducible order - subsets are taken in the
//!    pool's own relative order, never re-sorted.
//!
//! 2. **Ordered Records Over Maps**: A world is an ordered list of
//!    holdings in quota-list order, so rendering never depends on map
//!    iteration order and duplicate keys are a loud panic, not a silent
//!    overwrite.
//!
//! 3. **One Runtime Failure**: The only recoverable-looking error is a
//!    quota exceeding the remaining pool, and it isn't recovered - the
//!    driver aborts before printing anything. Malformed construction
//!    (duplicate cards, duplicate participants) panics instead.
//!
//! ## Modules
//!
//! - `core`: cards, the deck, and the deal configuration
//! - `deal`: the recursive partitioner and the `World` type
//! - `render`: Alloy text output

pub mod core;
pub mod deal;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Card, DealConfig, Deck, Quota};

pub use crate::deal::{enumerate_worlds, DealError, Hand, Holding, World};

pub use crate::render::{holds_fact, holds_line, sig_declaration, world_atom};
