//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Coupon frequency that is not a positive divisor of twelve months.
    #[error("Invalid coupon frequency: {value}")]
    InvalidFrequency {
        /// The rejected input.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(value: impl Into<String>) -> Self {
        Self::InvalidFrequency {
            value: value.into(),
        }
    }
}
