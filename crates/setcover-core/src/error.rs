//! Error types for set cover operations

use thiserror::Error;

/// Main error type for set cover operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetCoverError {
    /// The set family contains no sets at all
    #[error("Invalid input: set family is empty")]
    EmptyFamily,

    /// A set identifier was inserted twice
    #[error("Invalid input: duplicate set identifier {0}")]
    DuplicateSetId(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for set cover operations
pub type Result<T> = std::result::Result<T, SetCoverError>;
