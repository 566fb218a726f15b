//! World enumeration.
//!
//! The partitioner walks the quota list front to back. At each step it
//! enumerates every k-subset of the remaining pool in the pool's existing
//! relative order, recurses on the pool minus the subset, and prepends the
//! current participant's pick onto every world the recursion returns.
//!
//! Subset order is a determinism contract: for a fixed deck and quota list
//! the worlds come back in the same order on every run. Because subsets are
//! taken positionally, an ascending deck yields numerically ascending hands,
//! but an unsorted deck is enumerated in its own order, not sorted.
//!
//! No memoization: every recursive call sees a strictly smaller, distinct
//! pool, so there are no overlapping subproblems. The total world count is
//! the multinomial `n! / (q1! q2! ... qm!)` - 140 for the reference deal.

use im::Vector;

use crate::core::{Card, DealConfig, Deck, Quota};

use super::error::DealError;
use super::world::{Hand, World};

/// Enumerate every world satisfying `config` against `deck`.
///
/// Quotas summing to less than the deck size are permitted; leftover cards
/// simply appear in no holding. Quotas exceeding the remaining pool abort
/// with [`DealError::InsufficientSupply`].
///
/// ## Usage
///
/// ```
/// use deal_worlds::core::{DealConfig, Deck};
/// use deal_worlds::deal::enumerate_worlds;
///
/// let worlds = enumerate_worlds(&Deck::sequential(7), &DealConfig::reference()).unwrap();
/// assert_eq!(worlds.len(), 140);
/// ```
pub fn enumerate_worlds(deck: &Deck, config: &DealConfig) -> Result<Vec<World>, DealError> {
    let pool: Vector<Card> = deck.cards().iter().copied().collect();
    assign(&pool, config.quotas())
}

/// Recursive core: satisfy `quotas` from `pool`.
fn assign(pool: &Vector<Card>, quotas: &[Quota]) -> Result<Vec<World>, DealError> {
    let (quota, rest) = match quotas.split_first() {
        Some(split) => split,
        // No demands left: exactly one world, the empty one.
        None => return Ok(vec![World::empty()]),
    };

    if pool.len() < quota.count {
        return Err(DealError::InsufficientSupply {
            needed: quota.count,
            available: pool.iter().copied().collect(),
        });
    }

    let mut worlds = Vec::new();
    for pick in k_subsets(pool, quota.count) {
        let remaining: Vector<Card> = pool
            .iter()
            .copied()
            .filter(|card| !pick.contains(card))
            .collect();
        for tail in assign(&remaining, rest)? {
            worlds.push(tail.with_front(quota.name.clone(), pick.clone()));
        }
    }
    Ok(worlds)
}

/// All k-element subsets of `pool`, lexicographic by pool position.
///
/// Returns a single empty hand for `k == 0` and nothing when `k` exceeds
/// the pool size.
pub fn k_subsets(pool: &Vector<Card>, k: usize) -> Vec<Hand> {
    let mut out = Vec::new();
    let mut current = Hand::new();
    extend_subset(pool, 0, k, &mut current, &mut out);
    out
}

fn extend_subset(
    pool: &Vector<Card>,
    start: usize,
    k: usize,
    current: &mut Hand,
    out: &mut Vec<Hand>,
) {
    if k == 0 {
        out.push(current.clone());
        return;
    }
    if pool.len() < start + k {
        return;
    }
    for i in start..=pool.len() - k {
        current.push(pool[i]);
        extend_subset(pool, i + 1, k - 1, current, out);
        current.pop();
    }
}
