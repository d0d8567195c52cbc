//! Price-yield approximation lines around a resolved bond.
//!
//! For yields `i` within half the bond's yield on either side, each point
//! carries the first-order (duration) and second-order (duration plus
//! convexity) price estimates. Data only; rendering is up to the caller.

use serde::Serialize;

use crate::record::BondRecord;
use crate::risk::{price_change_from_duration, price_change_with_convexity};

/// Number of steps between the lowest and highest sampled yield.
pub const CURVE_STEPS: u32 = 200;

/// Step size as a fraction of the yield.
const STEP_FRACTION: f64 = 0.005;

/// One sampled yield with both price estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Sampled yield as a decimal fraction.
    pub yield_value: f64,
    /// `P - D (i - y) P`
    pub duration_price: f64,
    /// `P - D (i - y) P + 0.5 C (i - y)² P`
    pub convexity_price: f64,
}

/// Sampled duration and convexity lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceYieldCurve {
    price: f64,
    yield_value: f64,
    points: Vec<CurvePoint>,
}

impl PriceYieldCurve {
    /// Samples the curve for a record using its modified duration.
    pub fn sample(record: &BondRecord) -> Self {
        Self::from_measures(
            record.price(),
            record.yield_to_maturity(),
            record.modified_duration(),
            record.convexity(),
        )
    }

    /// Samples the curve from raw measures.
    ///
    /// A zero yield has zero width and gives a single point.
    pub fn from_measures(price: f64, ytm: f64, modified_duration: f64, convexity: f64) -> Self {
        let point = |i: f64| {
            let dy = i - ytm;
            CurvePoint {
                yield_value: i,
                duration_price: price + price_change_from_duration(modified_duration, price, dy),
                convexity_price: price
                    + price_change_with_convexity(modified_duration, convexity, price, dy),
            }
        };

        let width = ytm.abs();
        let points = if width == 0.0 {
            vec![point(ytm)]
        } else {
            let low = ytm - 0.5 * width;
            let step = STEP_FRACTION * width;
            (0..=CURVE_STEPS)
                .map(|k| point(low + step * f64::from(k)))
                .collect()
        };

        Self {
            price,
            yield_value: ytm,
            points,
        }
    }

    /// Price at the centre of the curve.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Yield at the centre of the curve.
    pub fn yield_value(&self) -> f64 {
        self.yield_value
    }

    /// Sampled points in increasing yield order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }
}
