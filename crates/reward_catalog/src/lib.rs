//! Reward catalog for ReviewRoulette.
//!
//! Defines the static list of rewards handed out when a pull request review
//! is approved, the loading and validation of the catalog file, and the
//! weighted random selection over it.
//!
//! The catalog is loaded once at startup and never mutated afterwards, so a
//! successfully constructed [`RewardCatalog`] can be shared across request
//! handlers without synchronization.

pub mod catalog;
pub mod errors;
pub mod selector;

// Re-export for convenient access
pub use catalog::{Rarity, RewardCatalog, RewardItem};
pub use errors::{CatalogError, CatalogResult};
pub use selector::{select, select_with_roll};
