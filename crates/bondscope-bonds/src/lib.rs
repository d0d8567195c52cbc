//! # Bondscope Bonds
//!
//! Valuation and risk-measure engine for plain fixed-coupon bonds.
//!
//! This crate provides:
//!
//! - **Pricing**: closed-form price from yield, Newton-Raphson yield from price
//! - **Risk**: Macaulay duration, modified duration, convexity
//! - **Tenor**: bucketing time to maturity into treasury tenors
//! - **Spreads**: benchmark treasury lookup with a seven-day lookback
//! - **Curve**: duration and convexity price-yield approximation lines
//!
//! ## Example
//!
//! ```rust
//! use bondscope_bonds::prelude::*;
//! use bondscope_core::types::{Date, Frequency};
//!
//! let terms = BondTerms::builder()
//!     .face_value(1000.0)
//!     .coupon_rate(0.08)
//!     .frequency(Frequency::SemiAnnual)
//!     .settlement(Date::from_ymd(2020, 1, 1).unwrap())
//!     .maturity(Date::from_ymd(2026, 1, 1).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let record = ValuationEngine::without_benchmark()
//!     .value(terms, Quote::Price(911.37))
//!     .unwrap();
//!
//! assert!(record.yield_to_maturity() > 0.08);
//! assert!(record.modified_duration() < record.macaulay_duration());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::too_many_arguments)]

pub mod curve;
pub mod engine;
pub mod error;
pub mod pricing;
pub mod quote;
pub mod record;
pub mod risk;
pub mod spreads;
pub mod tenor;
pub mod terms;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::{CurvePoint, PriceYieldCurve};
    pub use crate::engine::ValuationEngine;
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{price_from_yield, YieldResult, YieldSolver};
    pub use crate::quote::{Quote, Resolution};
    pub use crate::record::BondRecord;
    pub use crate::risk::RiskMeasures;
    pub use crate::spreads::{BenchmarkResolver, BenchmarkYield};
    pub use crate::tenor::{Tenor, TenorCutoffs};
    pub use crate::terms::{BondTerms, BondTermsBuilder};
}

pub use engine::ValuationEngine;
pub use error::{BondError, BondResult};
pub use quote::{Quote, Resolution};
pub use record::BondRecord;
pub use tenor::{Tenor, TenorCutoffs};
pub use terms::BondTerms;
