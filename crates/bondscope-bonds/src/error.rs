//! Error types for bond operations.

use thiserror::Error;

use bondscope_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond valuation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Settlement date is after maturity.
    #[error("Settlement date {settlement} is after maturity {maturity}")]
    SettlementAfterMaturity {
        /// Settlement date.
        settlement: String,
        /// Maturity date.
        maturity: String,
    },

    /// A formula hit a zero divisor or produced a non-finite value.
    #[error("Numerically undefined {quantity}: {reason}")]
    NumericallyUndefined {
        /// Quantity being computed (price, yield, duration, ...).
        quantity: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// Yield calculation failed to converge.
    #[error("Yield calculation failed to converge after {iterations} iterations (last estimate {last_estimate})")]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last yield iterate.
        last_estimate: f64,
    },
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a numerical degeneracy error.
    #[must_use]
    pub fn undefined(quantity: &'static str, reason: impl Into<String>) -> Self {
        Self::NumericallyUndefined {
            quantity,
            reason: reason.into(),
        }
    }

    /// Maps a solver failure into the bond error space.
    ///
    /// Non-convergence is not handled here: the yield solver decides whether
    /// the last iterate is acceptable.
    pub(crate) fn from_math(quantity: &'static str, err: &MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations, last, ..
            } => Self::YieldConvergenceFailed {
                iterations: *iterations,
                last_estimate: *last,
            },
            other => Self::undefined(quantity, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_spec("face value must be positive");
        assert!(err.to_string().contains("face value"));

        let err = BondError::undefined("price", "zero discount base");
        assert_eq!(
            err.to_string(),
            "Numerically undefined price: zero discount base"
        );
    }

    #[test]
    fn test_from_math() {
        let err = BondError::from_math("yield", &MathError::DivisionByZero { value: 0.0 });
        assert!(matches!(
            err,
            BondError::NumericallyUndefined {
                quantity: "yield",
                ..
            }
        ));

        let err = BondError::from_math("yield", &MathError::convergence_failed(1000, 0.5, 0.07));
        assert_eq!(
            err,
            BondError::YieldConvergenceFailed {
                iterations: 1000,
                last_estimate: 0.07
            }
        );
    }
}
