//! Deal failure conditions.
//!
//! There is exactly one runtime failure: a quota asking for more cards than
//! remain in the pool. It is never caught or retried; the driver lets it
//! abort the run before any output is written. Everything else that can go
//! wrong (duplicate participants, duplicate cards) is a programming error
//! and panics at construction time instead.

use thiserror::Error;

use crate::core::Card;

/// Error raised while enumerating worlds.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DealError {
    /// A quota demanded more cards than the pool still holds.
    #[error("insufficient cards remaining: need {needed} from [{}]", labels(.available))]
    InsufficientSupply {
        /// Cards the current quota asked for.
        needed: usize,
        /// The pool at the point of failure, in pool order.
        available: Vec<Card>,
    },
}

fn labels(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}
