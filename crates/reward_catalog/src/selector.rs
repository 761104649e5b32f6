//! Weighted random selection over the reward catalog.
//!
//! Each item is drawn with probability `weight / total_weight`. The draw is
//! split into two layers: [`select`] rolls from a caller-supplied random
//! number generator, while [`select_with_roll`] takes the unit-interval roll
//! directly so the walk itself is deterministic under test.

use rand::Rng;
use tracing::trace;

use crate::catalog::{RewardCatalog, RewardItem};

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;

/// Draws a reward from the catalog using the supplied random number
/// generator.
pub fn select<'a, R: Rng + ?Sized>(catalog: &'a RewardCatalog, rng: &mut R) -> &'a RewardItem {
    select_with_roll(catalog, rng.gen::<f64>())
}

/// Draws a reward from the catalog for a fixed roll in `[0.0, 1.0)`.
///
/// The roll is scaled by the total catalog weight, then walked through the
/// items in catalog order, subtracting each weight until a bucket covers the
/// remainder. A roll that exhausts every earlier bucket lands on the last
/// item; floating-point error can leave a sliver of the scaled range past
/// the final bucket boundary, and rolls in that sliver must not fall off the
/// end of the catalog.
pub fn select_with_roll<'a>(catalog: &'a RewardCatalog, unit_roll: f64) -> &'a RewardItem {
    let (last, head) = catalog
        .items()
        .split_last()
        .expect("catalog construction guarantees at least one item");

    let mut remaining = unit_roll * catalog.total_weight();
    for item in head {
        if remaining < item.weight {
            trace!(reward = %item.name, "Selected reward");
            return item;
        }
        remaining -= item.weight;
    }

    trace!(reward = %last.name, "Selected reward");
    last
}
