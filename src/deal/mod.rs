//! Deal enumeration: every world the quota list allows.
//!
//! ## Key Types
//!
//! - `World` / `Holding`: one complete distribution, in quota-list order
//! - `Hand`: one participant's cards
//! - `DealError`: the single input-validation failure
//! - `enumerate_worlds`: the partitioner entry point

pub mod error;
pub mod partition;
pub mod world;

pub use error::DealError;
pub use partition::enumerate_worlds;
pub use world::{Hand, Holding, World};
