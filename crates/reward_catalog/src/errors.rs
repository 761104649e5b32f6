//! Reward catalog error types.
//!
//! Domain-specific errors for catalog loading, parsing, and validation
//! operations.

use thiserror::Error;

/// Reward catalog errors.
///
/// These errors occur when loading, parsing, or validating the reward
/// catalog file. All of them leave the service without a usable catalog,
/// so startup treats them as fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Reward catalog file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to access reward catalog file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Failed to parse reward catalog: {reason}")]
    ParseError { reason: String },

    #[error("Reward catalog contains no items")]
    EmptyCatalog,

    #[error("Invalid weight {weight} for reward '{name}': weights must be positive and finite")]
    InvalidWeight { name: String, weight: f64 },

    #[error("Reward catalog total weight {total} is not finite")]
    InvalidTotalWeight { total: f64 },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
