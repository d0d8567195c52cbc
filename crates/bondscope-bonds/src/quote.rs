//! Market input for a valuation and how the other side was derived.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The one market value supplied for a bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quote {
    /// Market price in currency units (same scale as face value).
    Price(f64),
    /// Annual yield-to-maturity as a decimal fraction.
    Yield(f64),
}

impl Quote {
    /// Returns the quoted number.
    pub fn value(&self) -> f64 {
        match self {
            Quote::Price(v) | Quote::Yield(v) => *v,
        }
    }

    /// True for [`Quote::Price`].
    pub fn is_price(&self) -> bool {
        matches!(self, Quote::Price(_))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Price(p) => write!(f, "price {p}"),
            Quote::Yield(y) => write!(f, "yield {:.4}%", y * 100.0),
        }
    }
}

/// How the missing half of the price/yield pair was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Resolution {
    /// Closed-form price from the quoted yield.
    PriceFromYield,
    /// Newton-Raphson yield from the quoted price.
    YieldFromPrice {
        /// Iterations used.
        iterations: u32,
        /// False when the iteration cap was hit.
        converged: bool,
    },
}

impl Resolution {
    /// False only for an unconverged yield solve.
    pub fn converged(&self) -> bool {
        match self {
            Resolution::PriceFromYield => true,
            Resolution::YieldFromPrice { converged, .. } => *converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_value() {
        assert_eq!(Quote::Price(911.37).value(), 911.37);
        assert!(Quote::Price(1.0).is_price());
        assert!(!Quote::Yield(0.05).is_price());
        assert_eq!(Quote::Yield(0.09).to_string(), "yield 9.0000%");
    }

    #[test]
    fn test_resolution_serde() {
        let json = serde_json::to_string(&Resolution::YieldFromPrice {
            iterations: 17,
            converged: true,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"method":"yield_from_price","iterations":17,"converged":true}"#
        );
        assert!(Resolution::PriceFromYield.converged());
    }
}
