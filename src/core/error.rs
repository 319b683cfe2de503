//! Mailsmith Error Definitions
//!
//! Defines error types used throughout the crate.

use thiserror::Error;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Schema violation at {path}: {constraint} (got {value})")]
    SchemaViolation {
        /// Wire-form path to the offending field
        path: String,
        /// The constraint that was violated
        constraint: String,
        /// The received value, rendered as JSON
        value: String,
    },

    #[error("Unknown module variant at {path}: {tag:?}")]
    UnknownVariant {
        /// Wire-form path to the offending module
        path: String,
        /// The type tag that is not in the closed set
        tag: String,
    },

    // =========================================================================
    // Provider Errors
    // =========================================================================
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Completion request failed: {0}")]
    CompletionFailed(String),

    #[error("Completion returned no parseable candidate: {0}")]
    EmptyCompletion(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;
