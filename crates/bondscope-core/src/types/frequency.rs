//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Coupon payment frequency.
///
/// Every variant pays a whole number of months apart, i.e. the number of
/// payments per year divides twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Every four months (3 per year)
    TriAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Every two months (6 per year)
    BiMonthly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// All supported frequencies, least to most frequent.
    pub const ALL: [Frequency; 6] = [
        Frequency::Annual,
        Frequency::SemiAnnual,
        Frequency::TriAnnual,
        Frequency::Quarterly,
        Frequency::BiMonthly,
        Frequency::Monthly,
    ];

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::TriAnnual => 3,
            Frequency::Quarterly => 4,
            Frequency::BiMonthly => 6,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Looks up the frequency paying `periods` coupons per year.
    #[must_use]
    pub fn from_periods_per_year(periods: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.periods_per_year() == periods)
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CoreError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Self::from_periods_per_year(periods)
            .ok_or_else(|| CoreError::invalid_frequency(periods.to_string()))
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    /// Accepts payments per year (`"2"`) or a name (`"semi-annually"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        if let Ok(periods) = normalized.parse::<u32>() {
            return Self::try_from(periods);
        }
        match normalized.as_str() {
            "annual" | "annually" | "yearly" => Ok(Frequency::Annual),
            "semiannual" | "semiannually" => Ok(Frequency::SemiAnnual),
            "triannual" | "triannually" => Ok(Frequency::TriAnnual),
            "quarterly" => Ok(Frequency::Quarterly),
            "bimonthly" => Ok(Frequency::BiMonthly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(CoreError::invalid_frequency(s)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::TriAnnual => "Tri-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::BiMonthly => "Bi-Monthly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
