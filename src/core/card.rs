//! Card labels and the deck being partitioned.
//!
//! ## Card
//!
//! A card is identified by its positive integer label. Labels are opaque to
//! the dealer - only the rendered output interprets them as `Card<n>` tokens.
//!
//! ## Deck
//!
//! An ordered sequence of distinct cards, immutable once constructed.
//! The reference configuration uses `Deck::sequential(7)` for cards 1..=7,
//! but any distinct labels in any order are accepted; enumeration order
//! follows deck order, not numeric order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A single card, identified by its integer label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(pub u32);

impl Card {
    /// Create a card with the given label.
    #[must_use]
    pub const fn new(label: u32) -> Self {
        Self(label)
    }

    /// Get the raw label value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The label as it appears in rendered output (`"3"`, not `"Card3"`).
    #[must_use]
    pub fn label(self) -> String {
        self.0.to_string()
    }
}

impl From<u32> for Card {
    fn from(label: u32) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The fixed ordered set of distinct cards being partitioned.
///
/// ## Usage
///
/// ```
/// use deal_worlds::core::{Card, Deck};
///
/// let deck = Deck::sequential(7);
/// assert_eq!(deck.len(), 7);
/// assert_eq!(deck.cards()[0], Card::new(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck from an explicit card list.
    ///
    /// Card order is preserved; it determines enumeration order downstream.
    ///
    /// Panics if any label appears twice.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(*card) {
                panic!("Duplicate card {} in deck", card);
            }
        }
        Self { cards }
    }

    /// Create the deck of cards labeled `1..=n`, in ascending order.
    #[must_use]
    pub fn sequential(n: u32) -> Self {
        Self {
            cards: (1..=n).map(Card).collect(),
        }
    }

    /// The cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check whether the deck contains a card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}
