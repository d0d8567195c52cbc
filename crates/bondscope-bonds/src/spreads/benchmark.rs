//! Benchmark yield lookup with a backward lookback over recent dates.
//!
//! Treasury series have no observation on weekends and holidays, so the
//! resolver asks for the settlement date first and then walks back one day
//! at a time until a value turns up or the attempts run out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bondscope_core::types::Date;
use bondscope_traits::{BenchmarkSource, Observation, SeriesId};

use crate::tenor::Tenor;

/// Default number of dates tried: settlement plus six days back.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 7;

/// A benchmark observation that was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkYield {
    /// Series the value came from.
    pub series: SeriesId,
    /// Date of the observation (settlement or up to six days earlier).
    pub observation_date: Date,
    /// Rate as a decimal fraction.
    pub rate: Decimal,
    /// Lookups made, including the successful one.
    pub attempts: u32,
}

impl BenchmarkYield {
    /// Rate as `f64`.
    pub fn rate_f64(&self) -> Option<f64> {
        self.rate.to_f64()
    }
}

/// Where the lookback stands after each lookup.
#[derive(Debug)]
enum Lookback {
    Searching { attempt: u32 },
    Found(BenchmarkYield),
    Exhausted,
}

/// Resolves a tenor's benchmark rate from a [`BenchmarkSource`].
#[derive(Clone)]
pub struct BenchmarkResolver {
    source: Arc<dyn BenchmarkSource>,
    max_attempts: u32,
    overall_timeout: Option<Duration>,
}

impl std::fmt::Debug for BenchmarkResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkResolver")
            .field("source_type", &self.source.source_type())
            .field("max_attempts", &self.max_attempts)
            .field("overall_timeout", &self.overall_timeout)
            .finish()
    }
}

impl BenchmarkResolver {
    /// Creates a resolver with seven attempts and no overall deadline.
    pub fn new(source: Arc<dyn BenchmarkSource>) -> Self {
        Self {
            source,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            overall_timeout: None,
        }
    }

    /// Sets how many dates to try. Zero disables lookups entirely.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Gives up (without a value) once this much time has passed.
    #[must_use]
    pub fn with_overall_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.overall_timeout = timeout;
        self
    }

    /// Maximum number of lookups per resolution.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Finds the benchmark rate for `tenor` on or shortly before `settlement`.
    ///
    /// Returns `None` when every attempt came back empty or failed. Transport
    /// failures are logged and otherwise treated like missing data.
    pub fn resolve(&self, tenor: Tenor, settlement: Date) -> Option<BenchmarkYield> {
        let series = tenor.series_id();
        let started = Instant::now();
        let mut state = Lookback::Searching { attempt: 0 };

        loop {
            state = match state {
                Lookback::Found(found) => {
                    debug!(
                        series = %found.series,
                        date = %found.observation_date,
                        rate = %found.rate,
                        attempts = found.attempts,
                        "benchmark resolved"
                    );
                    return Some(found);
                }
                Lookback::Exhausted => {
                    warn!(
                        series = %series,
                        settlement = %settlement,
                        max_attempts = self.max_attempts,
                        "no benchmark observation found"
                    );
                    return None;
                }
                Lookback::Searching { attempt } if attempt >= self.max_attempts => {
                    Lookback::Exhausted
                }
                Lookback::Searching { .. } if self.deadline_passed(started) => {
                    warn!(series = %series, "benchmark lookup deadline passed");
                    Lookback::Exhausted
                }
                Lookback::Searching { attempt } => {
                    let date = settlement.add_days(-i64::from(attempt));
                    self.step(&series, date, attempt + 1)
                }
            };
        }
    }

    fn step(&self, series: &SeriesId, date: Date, attempt: u32) -> Lookback {
        match self.source.observe(series, date) {
            Observation::Rate(rate) => Lookback::Found(BenchmarkYield {
                series: series.clone(),
                observation_date: date,
                rate,
                attempts: attempt,
            }),
            Observation::NoData => {
                debug!(series = %series, date = %date, attempt, "no observation");
                Lookback::Searching { attempt }
            }
            Observation::Unavailable(e) => {
                warn!(series = %series, date = %date, attempt, error = %e, "benchmark source failed");
                Lookback::Searching { attempt }
            }
        }
    }

    fn deadline_passed(&self, started: Instant) -> bool {
        self.overall_timeout
            .is_some_and(|timeout| started.elapsed() >= timeout)
    }
}
