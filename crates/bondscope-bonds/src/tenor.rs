//! Tenor buckets and the benchmark series behind each one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use bondscope_traits::SeriesId;

use crate::error::BondError;
use crate::terms::BondTerms;

/// Days per year used to turn a day count into years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Standard treasury maturity bucket.
///
/// Serialises as its [`label`](Self::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tenor {
    /// 1 month
    #[serde(rename = "1 Month")]
    OneMonth,
    /// 3 months
    #[serde(rename = "3 Month")]
    ThreeMonth,
    /// 6 months
    #[serde(rename = "6 Month")]
    SixMonth,
    /// 1 year
    #[serde(rename = "1 Year")]
    OneYear,
    /// 2 years
    #[serde(rename = "2 Year")]
    TwoYear,
    /// 3 years
    #[serde(rename = "3 Year")]
    ThreeYear,
    /// 5 years
    #[serde(rename = "5 Year")]
    FiveYear,
    /// 10 years
    #[serde(rename = "10 Year")]
    TenYear,
    /// 20 years
    #[serde(rename = "20 Year")]
    TwentyYear,
    /// 30 years
    #[serde(rename = "30 Year")]
    ThirtyYear,
}

impl Tenor {
    /// All tenors, shortest first.
    pub const ALL: [Tenor; 10] = [
        Tenor::OneMonth,
        Tenor::ThreeMonth,
        Tenor::SixMonth,
        Tenor::OneYear,
        Tenor::TwoYear,
        Tenor::ThreeYear,
        Tenor::FiveYear,
        Tenor::TenYear,
        Tenor::TwentyYear,
        Tenor::ThirtyYear,
    ];

    /// Buckets a time to maturity given in years.
    ///
    /// Each bucket is closed at its upper bound; anything beyond the 20-year
    /// bound is 30 years. NaN falls through to 30 years.
    pub fn from_years(years: f64, cutoffs: TenorCutoffs) -> Self {
        let (ten_year_bound, twenty_year_bound) = cutoffs.long_bounds();

        if years <= 0.1667 {
            Tenor::OneMonth
        } else if years <= 0.375 {
            Tenor::ThreeMonth
        } else if years <= 0.75 {
            Tenor::SixMonth
        } else if years <= 1.5 {
            Tenor::OneYear
        } else if years <= 2.5 {
            Tenor::TwoYear
        } else if years <= 4.0 {
            Tenor::ThreeYear
        } else if years <= 7.5 {
            Tenor::FiveYear
        } else if years <= ten_year_bound {
            Tenor::TenYear
        } else if years <= twenty_year_bound {
            Tenor::TwentyYear
        } else {
            Tenor::ThirtyYear
        }
    }

    /// Buckets a calendar-day distance.
    pub fn from_days(days: i64, cutoffs: TenorCutoffs) -> Self {
        Self::from_years(days as f64 / DAYS_PER_YEAR, cutoffs)
    }

    /// Buckets the time from settlement to maturity.
    pub fn classify(terms: &BondTerms, cutoffs: TenorCutoffs) -> Self {
        Self::from_days(terms.days_to_maturity(), cutoffs)
    }

    /// Treasury constant-maturity series for this tenor.
    pub fn series_code(&self) -> &'static str {
        match self {
            Tenor::OneMonth => "DGS1MO",
            Tenor::ThreeMonth => "DGS3MO",
            Tenor::SixMonth => "DGS6MO",
            Tenor::OneYear => "DGS1",
            Tenor::TwoYear => "DGS2",
            Tenor::ThreeYear => "DGS3",
            Tenor::FiveYear => "DGS5",
            Tenor::TenYear => "DGS10",
            Tenor::TwentyYear => "DGS20",
            Tenor::ThirtyYear => "DGS30",
        }
    }

    /// [`series_code`](Self::series_code) as a [`SeriesId`].
    pub fn series_id(&self) -> SeriesId {
        SeriesId::new(self.series_code())
    }

    /// Human-readable label, e.g. `"10 Year"`.
    pub fn label(&self) -> &'static str {
        match self {
            Tenor::OneMonth => "1 Month",
            Tenor::ThreeMonth => "3 Month",
            Tenor::SixMonth => "6 Month",
            Tenor::OneYear => "1 Year",
            Tenor::TwoYear => "2 Year",
            Tenor::ThreeYear => "3 Year",
            Tenor::FiveYear => "5 Year",
            Tenor::TenYear => "10 Year",
            Tenor::TwentyYear => "20 Year",
            Tenor::ThirtyYear => "30 Year",
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Upper bounds of the 10-year and 20-year buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenorCutoffs {
    /// 180 and 300 years: everything past 7.5 years up to 180 is 10Y.
    #[default]
    Reference,
    /// 15 and 25 years.
    Calendar,
}

impl TenorCutoffs {
    /// `(ten_year_bound, twenty_year_bound)` in years.
    pub fn long_bounds(&self) -> (f64, f64) {
        match self {
            TenorCutoffs::Reference => (15.0 * 12.0, 25.0 * 12.0),
            TenorCutoffs::Calendar => (15.0, 25.0),
        }
    }
}

impl FromStr for TenorCutoffs {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(TenorCutoffs::Reference),
            "calendar" => Ok(TenorCutoffs::Calendar),
            other => Err(BondError::invalid_spec(format!(
                "unknown tenor cutoffs '{other}', expected 'reference' or 'calendar'"
            ))),
        }
    }
}

impl fmt::Display for TenorCutoffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenorCutoffs::Reference => write!(f, "reference"),
            TenorCutoffs::Calendar => write!(f, "calendar"),
        }
    }
}
