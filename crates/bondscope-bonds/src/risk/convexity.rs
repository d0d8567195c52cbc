//! Convexity.
//!
//! ```text
//! C = [ (C/P) Σ i(i+1) / (1+r)^(i+2) + (F/P) n(n+1) / (1+r)^(n+2) ] / f²
//! ```

use crate::error::{BondError, BondResult};
use crate::pricing::check_discount_base;
use crate::terms::BondTerms;

/// Convexity of `terms` at annual yield `ytm` and price `price`.
///
/// Uses the same period count as [`macaulay_duration`](super::macaulay_duration).
///
/// # Errors
///
/// Returns [`BondError::NumericallyUndefined`] for a zero or non-finite
/// price, or when `1 + r` is not positive.
pub fn convexity(terms: &BondTerms, ytm: f64, price: f64) -> BondResult<f64> {
    if price == 0.0 || !price.is_finite() {
        return Err(BondError::undefined(
            "convexity",
            format!("cannot scale by price {price}"),
        ));
    }

    let f = terms.periods_per_year();
    let r = ytm / f;
    check_discount_base(r, "convexity")?;

    let n = terms.risk_periods();
    let base = 1.0 + r;

    let coupon_sum: f64 = (1..=n)
        .map(|i| {
            let i = f64::from(i);
            i * (i + 1.0) / base.powf(i + 2.0)
        })
        .sum();

    let n_f = f64::from(n);
    let face_term = n_f * (n_f + 1.0) / base.powf(n_f + 2.0);

    let total = coupon_sum * terms.coupon_payment() / price + face_term * terms.face_value() / price;

    Ok(total / (f * f))
}

/// Second-order price change for a yield shift.
///
/// `-D P dy + 0.5 C P dy²`
pub fn price_change_with_convexity(
    mod_duration: f64,
    convexity: f64,
    price: f64,
    yield_change: f64,
) -> f64 {
    super::price_change_from_duration(mod_duration, price, yield_change)
        + 0.5 * convexity * yield_change * yield_change * price
}
