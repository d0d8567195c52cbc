//! The resolved valuation of one bond scenario.

use serde::Serialize;

use bondscope_core::types::{Date, Frequency};

use crate::quote::Resolution;
use crate::risk::RiskMeasures;
use crate::spreads::{to_bps, BenchmarkYield};
use crate::tenor::Tenor;
use crate::terms::BondTerms;

/// Immutable result of valuing a bond.
///
/// Built once by [`ValuationEngine::value`](crate::ValuationEngine::value);
/// a different price or yield means a new record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondRecord {
    #[serde(flatten)]
    terms: BondTerms,
    price: f64,
    yield_to_maturity: f64,
    resolution: Resolution,
    #[serde(flatten)]
    risk: RiskMeasures,
    tenor: Tenor,
    benchmark: Option<BenchmarkYield>,
    spread: Option<f64>,
}

impl BondRecord {
    pub(crate) fn new(
        terms: BondTerms,
        price: f64,
        yield_to_maturity: f64,
        resolution: Resolution,
        risk: RiskMeasures,
        tenor: Tenor,
        benchmark: Option<BenchmarkYield>,
    ) -> Self {
        let spread = benchmark
            .as_ref()
            .and_then(BenchmarkYield::rate_f64)
            .map(|rate| crate::spreads::yield_spread(yield_to_maturity, rate));

        Self {
            terms,
            price,
            yield_to_maturity,
            resolution,
            risk,
            tenor,
            benchmark,
            spread,
        }
    }

    /// Contractual terms.
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Face value.
    pub fn face_value(&self) -> f64 {
        self.terms.face_value()
    }

    /// Annual coupon rate.
    pub fn coupon_rate(&self) -> f64 {
        self.terms.coupon_rate()
    }

    /// Coupon frequency.
    pub fn frequency(&self) -> Frequency {
        self.terms.frequency()
    }

    /// Settlement date.
    pub fn settlement_date(&self) -> Date {
        self.terms.settlement()
    }

    /// Maturity date.
    pub fn maturity_date(&self) -> Date {
        self.terms.maturity()
    }

    /// Price, quoted or derived.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Annual yield-to-maturity, quoted or derived.
    pub fn yield_to_maturity(&self) -> f64 {
        self.yield_to_maturity
    }

    /// How the missing value was derived.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// All risk measures.
    pub fn risk(&self) -> &RiskMeasures {
        &self.risk
    }

    /// Macaulay duration in years.
    pub fn macaulay_duration(&self) -> f64 {
        self.risk.macaulay_duration
    }

    /// Modified duration.
    pub fn modified_duration(&self) -> f64 {
        self.risk.modified_duration
    }

    /// Convexity.
    pub fn convexity(&self) -> f64 {
        self.risk.convexity
    }

    /// Tenor bucket.
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Benchmark observation, when one was found.
    pub fn benchmark(&self) -> Option<&BenchmarkYield> {
        self.benchmark.as_ref()
    }

    /// Benchmark rate as a decimal fraction.
    pub fn benchmark_yield(&self) -> Option<f64> {
        self.benchmark.as_ref().and_then(BenchmarkYield::rate_f64)
    }

    /// `ytm - benchmark`, absent without a benchmark.
    pub fn spread(&self) -> Option<f64> {
        self.spread
    }

    /// Spread in basis points.
    pub fn spread_bps(&self) -> Option<f64> {
        self.spread.map(to_bps)
    }
}
