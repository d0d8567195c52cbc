//! Price of a bullet bond from its yield.
//!
//! ## Formula
//!
//! ```text
//! P = C * (1 - (1 + r)^-n) / r + F * (1 + r)^-n
//! ```
//!
//! where:
//! - C = coupon per period (`F * c / f`)
//! - r = periodic yield (`ytm / f`)
//! - n = whole coupon periods to maturity
//! - F = face value

use crate::error::{BondError, BondResult};
use crate::terms::BondTerms;

/// Closed-form price of `terms` at annual yield `ytm`.
///
/// A zero periodic rate uses the limit `C * n + F`. The annuity factor goes
/// through `ln_1p`/`exp_m1` so rates too small to move `1 + r` still
/// approach that limit continuously.
///
/// # Errors
///
/// Returns [`BondError::NumericallyUndefined`] when `1 + r` is not positive
/// or the result is not finite.
pub fn price_from_yield(terms: &BondTerms, ytm: f64) -> BondResult<f64> {
    let r = ytm / terms.periods_per_year();
    let n = terms.pricing_periods();
    let coupon = terms.coupon_payment();
    let face = terms.face_value();

    check_discount_base(r, "price")?;

    let periods = f64::from(n);
    let log_discount = -periods * r.ln_1p();
    let discount_factor = log_discount.exp();
    let annuity = if r == 0.0 {
        periods
    } else {
        -log_discount.exp_m1() / r
    };
    let price = coupon * annuity + face * discount_factor;

    if !price.is_finite() {
        return Err(BondError::undefined(
            "price",
            format!("non-finite price at yield {ytm}"),
        ));
    }
    Ok(price)
}

/// Discounted cash-flow sum for `n` coupons of `coupon` plus `face` at
/// periodic rate `r`.
pub(crate) fn discounted_value(n: u32, coupon: f64, face: f64, r: f64) -> f64 {
    let base = 1.0 + r;
    let coupons: f64 = (1..=n).map(|j| coupon / base.powi(j as i32)).sum();
    coupons + face / base.powi(n as i32)
}

/// Derivative of [`discounted_value`] with respect to the periodic rate.
pub(crate) fn discounted_value_derivative(n: u32, coupon: f64, face: f64, r: f64) -> f64 {
    let base = 1.0 + r;
    let coupons: f64 = (1..=n)
        .map(|j| f64::from(j) * coupon / base.powi(j as i32 + 1))
        .sum();
    -coupons - f64::from(n) * face / base.powi(n as i32 + 1)
}

pub(crate) fn check_discount_base(r: f64, quantity: &'static str) -> BondResult<()> {
    if !r.is_finite() || 1.0 + r <= 0.0 {
        return Err(BondError::undefined(
            quantity,
            format!("discount base 1 + r = {} is not positive", 1.0 + r),
        ));
    }
    Ok(())
}
