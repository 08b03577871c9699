//! Error types for document review.

use thiserror::Error;

/// Errors that can abort a review operation.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The input bytes are not a well-formed document container,
    /// or the container lacks a body.
    #[error("invalid document container: {message}")]
    InvalidFormat { message: String },

    /// The annotated document could not be re-encoded.
    #[error("failed to serialize annotated document: {message}")]
    Serialize { message: String },
}

/// Result type for review operations.
pub type ReviewResult<T> = Result<T, ReviewError>;
