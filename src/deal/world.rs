//! Worlds: one complete distribution of the deck.
//!
//! A world is an ordered record of holdings, not a name-keyed map. The
//! holdings sit in quota-list order, which is what makes rendering
//! deterministic without re-sorting; the formatter simply walks the record.
//!
//! Worlds are immutable once enumerated. The only construction path is
//! `World::empty()` plus `with_front`, which is how the partitioner builds
//! each world back-to-front as its recursion unwinds.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, Deck};

/// The cards one participant holds, in draw order.
///
/// SmallVec keeps reference-sized hands (up to 7 cards) off the heap.
pub type Hand = SmallVec<[Card; 7]>;

/// One participant's entry in a world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Participant name, as spelled in the quota list.
    pub participant: String,

    /// Cards held, in the order they were drawn from the pool.
    pub cards: Hand,
}

/// One complete, valid distribution of the deck across all participants.
///
/// ## Usage
///
/// ```
/// use deal_worlds::deal::{Hand, World};
/// use deal_worlds::core::Card;
///
/// let world = World::empty()
///     .with_front("B".to_string(), Hand::from_slice(&[Card(2), Card(3)]))
///     .with_front("A".to_string(), Hand::from_slice(&[Card(1)]));
///
/// assert_eq!(world.hand_of("A"), Some(&[Card(1)][..]));
/// assert_eq!(world.holdings()[0].participant, "A");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    holdings: Vec<Holding>,
}

impl World {
    /// The world with no holdings - the unit the recursion composes onto.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prepend a participant's holding.
    ///
    /// The partitioner assigns participants front-to-back but composes
    /// worlds as its recursion unwinds, so each level prepends.
    ///
    /// Panics if the participant already has a holding; disjoint recursion
    /// makes that unreachable, and a silent overwrite would corrupt the
    /// world, so the collision check is explicit.
    #[must_use]
    pub fn with_front(mut self, participant: String, cards: Hand) -> Self {
        if self.holdings.iter().any(|h| h.participant == participant) {
            panic!("Participant {:?} assigned twice in one world", participant);
        }
        self.holdings.insert(0, Holding { participant, cards });
        self
    }

    /// The holdings, in quota-list order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Look up one participant's hand.
    #[must_use]
    pub fn hand_of(&self, participant: &str) -> Option<&[Card]> {
        self.holdings
            .iter()
            .find(|h| h.participant == participant)
            .map(|h| h.cards.as_slice())
    }

    /// Number of participants holding cards.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.holdings.len()
    }

    /// Total cards held across all participants.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.holdings.iter().map(|h| h.cards.len()).sum()
    }

    /// Check that the holdings are pairwise disjoint and cover `deck` exactly.
    #[must_use]
    pub fn is_partition_of(&self, deck: &Deck) -> bool {
        let mut seen = FxHashSet::default();
        for holding in &self.holdings {
            for card in &holding.cards {
                if !deck.contains(*card) || !seen.insert(*card) {
                    return false;
                }
            }
        }
        seen.len() == deck.len()
    }
}
