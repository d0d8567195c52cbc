//! Spread of a bond yield over its treasury benchmark.

mod benchmark;

pub use benchmark::{BenchmarkResolver, BenchmarkYield, DEFAULT_MAX_ATTEMPTS};

/// Basis points per unit of yield.
pub const BPS_PER_UNIT: f64 = 10_000.0;

/// Yield spread `ytm - benchmark` as a decimal fraction.
pub fn yield_spread(ytm: f64, benchmark: f64) -> f64 {
    ytm - benchmark
}

/// Converts a decimal spread into basis points.
pub fn to_bps(spread: f64) -> f64 {
    spread * BPS_PER_UNIT
}
