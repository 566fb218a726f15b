//! Deal configuration: who draws, and how many.
//!
//! A `DealConfig` is an ordered list of quotas. Order matters twice over:
//! participants draw in quota-list order, and every rendered line iterates
//! participants in quota-list order, so output is deterministic.
//!
//! The partitioner itself does not require quotas to sum to the deck size
//! (leftover cards are permitted and simply go unassigned); the driver's
//! compiled-in configuration sums to the full deck so every card is held.

use serde::{Deserialize, Serialize};

/// One participant's exact draw requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    /// Participant name as it appears in rendered output.
    pub name: String,

    /// Exact number of cards this participant must receive.
    pub count: usize,
}

impl Quota {
    /// Create a new quota.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl std::fmt::Display for Quota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.count)
    }
}

/// Ordered quota list for one deal.
///
/// ## Usage
///
/// ```
/// use deal_worlds::core::DealConfig;
///
/// let config = DealConfig::new()
///     .with_quota("A", 1)
///     .with_quota("B", 3)
///     .with_quota("C", 3);
///
/// assert_eq!(config.quotas().len(), 3);
/// assert_eq!(config.total(), 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealConfig {
    quotas: Vec<Quota>,
}

impl DealConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant's quota.
    #[must_use]
    pub fn with_quota(mut self, name: impl Into<String>, count: usize) -> Self {
        self.quotas.push(Quota::new(name, count));
        self
    }

    /// The quotas, in draw order.
    #[must_use]
    pub fn quotas(&self) -> &[Quota] {
        &self.quotas
    }

    /// Total number of cards demanded across all participants.
    #[must_use]
    pub fn total(&self) -> usize {
        self.quotas.iter().map(|q| q.count).sum()
    }

    /// The reference configuration: seven cards split 1/3/3 among A, B, C.
    #[must_use]
    pub fn reference() -> Self {
        Self::new()
            .with_quota("A", 1)
            .with_quota("B", 3)
            .with_quota("C", 3)
    }
}
