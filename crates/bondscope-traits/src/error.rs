//! Error types for benchmark source operations.

use thiserror::Error;

/// Common error type for benchmark source operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraitError {
    /// Connection to external service failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Source answered with an error status
    #[error("source returned status {status}: {message}")]
    BadStatus {
        /// HTTP-like status code
        status: u16,
        /// Body or reason phrase
        message: String,
    },

    /// Requested resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Source not available
    #[error("source not available: {0}")]
    SourceNotAvailable(String),

    /// Operation timed out
    #[error("timeout")]
    Timeout,

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Authentication failed
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limited
    #[error("rate limited")]
    RateLimited,
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}
