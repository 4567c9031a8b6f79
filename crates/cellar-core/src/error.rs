//! Error types for the cellar library.
//!
//! This module provides a unified error type with explicit variants for
//! input validation, identifier, not-found and storage failures.

use thiserror::Error;

use crate::validate::ValidationErrors;

/// The unified error type for cellar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A payload failed schema validation. Carries one entry per
    /// offending field; nothing is partially applied.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A record identifier did not match the store's id format.
    #[error("invalid beer id '{value}': {reason}")]
    InvalidId { value: String, reason: String },

    /// A well-formed identifier matched no record.
    #[error("beer {id} not found")]
    NotFound { id: String },

    /// The underlying document store failed.
    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
