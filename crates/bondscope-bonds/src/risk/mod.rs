//! Risk measures: Macaulay duration, modified duration and convexity.
//!
//! Both duration and convexity count `frequency * whole years` periods to
//! maturity, which can differ from the month-based count used for pricing.

mod convexity;
mod duration;

pub use convexity::{convexity, price_change_with_convexity};
pub use duration::{macaulay_duration, modified_from_macaulay, price_change_from_duration};

use serde::{Deserialize, Serialize};

use crate::error::BondResult;
use crate::terms::BondTerms;

/// The three risk measures of a resolved bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMeasures {
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Convexity.
    pub convexity: f64,
}

impl RiskMeasures {
    /// Computes all measures for `terms` at the given yield and price.
    pub fn compute(terms: &BondTerms, ytm: f64, price: f64) -> BondResult<Self> {
        let macaulay = macaulay_duration(terms, ytm)?;
        let modified = modified_from_macaulay(macaulay, ytm, terms.frequency().periods_per_year())?;
        let convexity = convexity(terms, ytm, price)?;

        Ok(Self {
            macaulay_duration: macaulay,
            modified_duration: modified,
            convexity,
        })
    }
}
