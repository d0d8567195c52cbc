//! Benchmark rate source traits.
//!
//! A benchmark source answers one question: what was the published rate of
//! a treasury series on a given date? Everything else (lookback over
//! earlier dates, spread computation) happens in the engine.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::SeriesId;
use bondscope_core::Date;

/// Placeholder a series publishes for dates without an observation.
pub const MISSING_VALUE_SENTINEL: &str = ".";

/// Source type for benchmark data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Snapshot/request-response (REST APIs)
    Snapshot,
    /// File-based (CSV)
    File,
    /// Manual entry or no source at all
    Manual,
}

// =============================================================================
// OBSERVATION
// =============================================================================

/// Outcome of a single benchmark lookup.
///
/// The resolver walks backward over dates until it sees a [`Observation::Rate`];
/// the other two variants both mean "try the previous day".
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Rate as a decimal fraction (4.25% is `0.0425`).
    Rate(Decimal),
    /// The series has no value for this date (weekend, holiday, sentinel).
    NoData,
    /// The source could not be queried.
    Unavailable(TraitError),
}

impl Observation {
    /// Returns the rate if this observation carries one.
    #[must_use]
    pub fn rate(&self) -> Option<Decimal> {
        match self {
            Observation::Rate(rate) => Some(*rate),
            _ => None,
        }
    }

    /// Returns true if this observation carries a rate.
    #[must_use]
    pub fn has_data(&self) -> bool {
        matches!(self, Observation::Rate(_))
    }
}

impl From<Result<Option<Decimal>, TraitError>> for Observation {
    fn from(result: Result<Option<Decimal>, TraitError>) -> Self {
        match result {
            Ok(Some(rate)) => Observation::Rate(rate),
            Ok(None) => Observation::NoData,
            Err(e) => Observation::Unavailable(e),
        }
    }
}

// =============================================================================
// BENCHMARK SOURCE
// =============================================================================

/// Provider of daily benchmark rates.
///
/// Implementations perform blocking I/O. A lookup for a date without an
/// observation is `Ok(None)`, not an error.
pub trait BenchmarkSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Get the rate of `series` on `date` as a decimal fraction.
    fn get_rate(&self, series: &SeriesId, date: Date) -> Result<Option<Decimal>, TraitError>;

    /// Get the rate of `series` on `date` as an [`Observation`].
    fn observe(&self, series: &SeriesId, date: Date) -> Observation {
        self.get_rate(series, date).into()
    }
}

/// Parses a published observation value.
///
/// Values are percentages (`"4.25"`) and come back as decimal fractions
/// (`0.0425`). A blank value or the `"."` sentinel is `Ok(None)`.
///
/// # Errors
///
/// Returns [`TraitError::ParseError`] if the value is neither a number nor a
/// recognised gap marker.
pub fn parse_observation_value(raw: &str) -> Result<Option<Decimal>, TraitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_VALUE_SENTINEL {
        return Ok(None);
    }

    let percent = Decimal::from_str(trimmed)
        .map_err(|e| TraitError::ParseError(format!("invalid observation value '{trimmed}': {e}")))?;

    Ok(Some(percent / Decimal::ONE_HUNDRED))
}
