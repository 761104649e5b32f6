//! Reward catalog types and file loading.
//!
//! The catalog file is a JSON array of reward entries, each with a display
//! name, a selection weight, and a rarity tier. Loading validates the catalog
//! up front so the rest of the service never has to re-check it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CatalogError, CatalogResult};

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

/// Rarity tier of a reward item.
///
/// Stored in lowercase in the catalog file. Each tier has a fixed display
/// glyph that prefixes the notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Returns the display glyph for this rarity tier.
    pub fn glyph(&self) -> &'static str {
        match self {
            Rarity::Common => "⚪",
            Rarity::Uncommon => "🟢",
            Rarity::Rare => "🔵",
            Rarity::Legendary => "🟣✨",
        }
    }
}

/// A single entry in the reward catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    /// Display name of the reward
    pub name: String,

    /// Relative selection weight; higher weights are drawn more often
    pub weight: f64,

    /// Rarity tier shown alongside the reward name
    pub rarity: Rarity,
}

/// An ordered, validated collection of reward items.
///
/// Construction enforces the catalog rules: at least one item, and every
/// weight positive and finite. Item order is preserved from the catalog file
/// and drives the cumulative walk in [`crate::selector`], so the same items
/// in a different order form a different catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardCatalog {
    items: Vec<RewardItem>,
}

impl RewardCatalog {
    /// Builds a catalog from a list of reward items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` when the list is empty,
    /// `CatalogError::InvalidWeight` for the first item whose weight is not
    /// positive and finite, or `CatalogError::InvalidTotalWeight` when the
    /// weights sum past the finite range.
    pub fn from_items(items: Vec<RewardItem>) -> CatalogResult<Self> {
        if items.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for item in &items {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(CatalogError::InvalidWeight {
                    name: item.name.clone(),
                    weight: item.weight,
                });
            }
        }

        // Individually finite weights can still overflow the sum.
        let total: f64 = items.iter().map(|item| item.weight).sum();
        if !total.is_finite() {
            return Err(CatalogError::InvalidTotalWeight { total });
        }

        Ok(Self { items })
    }

    /// Loads and validates a catalog from a JSON file.
    ///
    /// The file must contain a JSON array of reward entries:
    ///
    /// ```json
    /// [
    ///     { "name": "Pikachu", "weight": 5, "rarity": "rare" }
    /// ]
    /// ```
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The file does not exist or cannot be read
    /// - The file is not a valid JSON array of reward entries
    /// - The entries fail catalog validation (empty list, bad weights)
    pub fn load(path: &Path) -> CatalogResult<Self> {
        debug!("Loading reward catalog from {:?}", path);

        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileAccessError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let items: Vec<RewardItem> =
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
                reason: e.to_string(),
            })?;

        let catalog = Self::from_items(items)?;
        debug!(items = catalog.items().len(), "Reward catalog loaded");

        Ok(catalog)
    }

    /// Returns the catalog items in file order.
    pub fn items(&self) -> &[RewardItem] {
        &self.items
    }

    /// Sum of all item weights. Positive and finite for any constructed
    /// catalog.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}
