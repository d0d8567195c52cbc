//! CLI error types.

use thiserror::Error;

use bondscope_core::Date;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// A numeric input was negative or not a number.
    #[error("Invalid {field}: {value}. Must be a non-negative number.")]
    NotNonNegative {
        /// Argument name.
        field: &'static str,
        /// Value given.
        value: f64,
    },

    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Must be at least 0 and below 100.")]
    InvalidCoupon(f64),

    /// Invalid coupon frequency.
    #[error("Invalid frequency: {0}. Use 1, 2, 3, 4, 6 or 12 (or a name such as semi-annual).")]
    InvalidFrequency(String),

    /// Settlement falls after maturity.
    #[error("Settlement date {settlement} is after maturity date {maturity}.")]
    SettlementAfterMaturity {
        /// Settlement date.
        settlement: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// Settlement falls in the future.
    #[error("Settlement date {settlement} is after today ({today}).")]
    SettlementInFuture {
        /// Settlement date.
        settlement: Date,
        /// Today's date.
        today: Date,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Benchmark source could not be set up.
    #[error("Benchmark source error: {0}")]
    Benchmark(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
