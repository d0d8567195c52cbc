//! Duration measures.
//!
//! ## Formulas
//!
//! ```text
//! D_mac = [ Σ (i/f) C / (1+r)^i + (n/f) F / (1+r)^n ] / [ Σ C / (1+r)^i + F / (1+r)^n ]
//! D_mod = D_mac / (1 + y/f)
//! ```
//!
//! with `n = f * whole years to maturity` and `r = y / f`.

use crate::error::{BondError, BondResult};
use crate::pricing::check_discount_base;
use crate::terms::BondTerms;

/// Macaulay duration of `terms` at annual yield `ytm`, in years.
///
/// # Errors
///
/// Returns [`BondError::NumericallyUndefined`] when `1 + r` is not positive
/// or the present value sum vanishes.
pub fn macaulay_duration(terms: &BondTerms, ytm: f64) -> BondResult<f64> {
    let f = terms.periods_per_year();
    let r = ytm / f;
    check_discount_base(r, "macaulay duration")?;

    let n = terms.risk_periods();
    let coupon = terms.coupon_payment();
    let face = terms.face_value();
    let base = 1.0 + r;

    let mut weighted_sum = 0.0;
    let mut present_value_sum = 0.0;

    for i in 1..=n {
        let t = f64::from(i) / f;
        let discount = base.powi(i as i32);
        weighted_sum += t * coupon / discount;
        present_value_sum += coupon / discount;
    }

    let final_discount = base.powi(n as i32);
    weighted_sum += f64::from(n) / f * face / final_discount;
    present_value_sum += face / final_discount;

    if present_value_sum == 0.0 || !present_value_sum.is_finite() {
        return Err(BondError::undefined(
            "macaulay duration",
            format!("present value sum is {present_value_sum}"),
        ));
    }

    Ok(weighted_sum / present_value_sum)
}

/// Convert Macaulay duration to modified duration.
///
/// # Arguments
///
/// * `macaulay` - Macaulay duration
/// * `ytm` - Yield to maturity (as decimal)
/// * `frequency` - Compounding frequency per year
pub fn modified_from_macaulay(macaulay: f64, ytm: f64, frequency: u32) -> BondResult<f64> {
    let r = ytm / f64::from(frequency);
    check_discount_base(r, "modified duration")?;
    Ok(macaulay / (1.0 + r))
}

/// Calculate approximate price change using modified duration.
///
/// # Arguments
///
/// * `mod_duration` - Modified duration
/// * `price` - Current price
/// * `yield_change` - Change in yield (as decimal, e.g., 0.01 for 100bps)
///
/// # Returns
///
/// Approximate price change
pub fn price_change_from_duration(mod_duration: f64, price: f64, yield_change: f64) -> f64 {
    -mod_duration * price * yield_change
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondscope_core::types::{Date, Frequency};

    fn terms(coupon: f64, freq: Frequency, maturity: (i32, u32, u32)) -> BondTerms {
        BondTerms::builder()
            .face_value(1000.0)
            .coupon_rate(coupon)
            .frequency(freq)
            .settlement(Date::from_ymd(2020, 1, 1).unwrap())
            .maturity(Date::from_ymd(maturity.0, maturity.1, maturity.2).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_macaulay_annual() {
        let t = terms(0.07, Frequency::Annual, (2035, 12, 31));
        let mac = macaulay_duration(&t, 0.09).unwrap();
        assert_relative_eq!(mac, 9.238_110, epsilon = 1e-5);
    }

    #[test]
    fn test_macaulay_semi_annual() {
        let t = terms(0.08, Frequency::SemiAnnual, (2026, 1, 1));
        let mac = macaulay_duration(&t, 0.1).unwrap();
        assert!(mac > 4.5 && mac < 6.0);
    }

    #[test]
    fn test_zero_coupon_duration_is_term() {
        let t = terms(0.0, Frequency::SemiAnnual, (2030, 1, 1));
        let mac = macaulay_duration(&t, 0.05).unwrap();
        assert_relative_eq!(mac, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matured_bond_has_zero_duration() {
        let t = terms(0.05, Frequency::Annual, (2020, 1, 1));
        assert_relative_eq!(macaulay_duration(&t, 0.05).unwrap(), 0.0);
    }

    #[test]
    fn test_modified_from_macaulay() {
        // D_mod = 5.0 / (1 + 0.06/2) = 5.0 / 1.03 ≈ 4.854
        let mod_dur = modified_from_macaulay(5.0, 0.06, 2).unwrap();
        assert_relative_eq!(mod_dur, 4.854, epsilon = 0.001);

        // equal at zero yield
        assert_relative_eq!(modified_from_macaulay(5.0, 0.0, 2).unwrap(), 5.0);
    }

    #[test]
    fn test_degenerate_yield() {
        let t = terms(0.05, Frequency::Annual, (2030, 1, 1));
        assert!(matches!(
            macaulay_duration(&t, -1.0),
            Err(BondError::NumericallyUndefined { .. })
        ));
        assert!(modified_from_macaulay(5.0, -2.0, 2).is_err());
    }

    #[test]
    fn test_price_change_approximation() {
        // Price should drop by approximately 5% for 100bp yield increase
        let change = price_change_from_duration(5.0, 100.0, 0.01);
        assert_relative_eq!(change, -5.0, epsilon = 0.01);
    }
}
