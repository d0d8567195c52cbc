//! Yield-to-maturity solver.
//!
//! Newton-Raphson on the discounted cash-flow sum, seeded at `c / f`. The
//! derivative is taken with respect to the periodic rate while the iterate
//! is the annual yield, so each step is `(target - P) / P'(r)`. The fixed
//! point is still the annual yield whose closed-form price equals the
//! target.
//!
//! # Example
//!
//! ```rust,ignore
//! use bondscope_bonds::pricing::YieldSolver;
//!
//! let result = YieldSolver::new().solve(&terms, 911.37)?;
//! println!("YTM: {:.4}%", result.yield_value * 100.0);
//! ```

use tracing::{debug, warn};

use bondscope_math::solvers::{
    newton_raphson, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use bondscope_math::MathError;

use super::price::{check_discount_base, discounted_value, discounted_value_derivative};
use crate::error::{BondError, BondResult};
use crate::terms::BondTerms;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// The calculated annual yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Price error at the returned yield.
    pub residual: f64,
    /// False when the iteration cap was hit and the last iterate returned.
    pub converged: bool,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone)]
pub struct YieldSolver {
    config: SolverConfig,
    strict_convergence: bool,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-6 on the step size
    /// Default max iterations: 1000
    /// Non-convergence returns the last iterate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            strict_convergence: false,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Fail with [`BondError::YieldConvergenceFailed`] instead of returning
    /// an unconverged iterate.
    #[must_use]
    pub fn with_strict_convergence(mut self, strict: bool) -> Self {
        self.strict_convergence = strict;
        self
    }

    /// Solver configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the annual yield that prices `terms` at `price`.
    ///
    /// # Errors
    ///
    /// - [`BondError::NumericallyUndefined`] for a non-positive or
    ///   non-finite price, a vanishing derivative (no coupon periods left)
    ///   or an iterate that leaves the finite range
    /// - [`BondError::YieldConvergenceFailed`] when the cap is hit and strict
    ///   convergence is on
    pub fn solve(&self, terms: &BondTerms, price: f64) -> BondResult<YieldResult> {
        if !price.is_finite() || price <= 0.0 {
            return Err(BondError::undefined(
                "yield",
                format!("price must be positive and finite, got {price}"),
            ));
        }

        let f = terms.periods_per_year();
        let n = terms.pricing_periods();
        let coupon = terms.coupon_payment();
        let face = terms.face_value();

        let objective = |ytm: f64| discounted_value(n, coupon, face, ytm / f) - price;
        let derivative = |ytm: f64| discounted_value_derivative(n, coupon, face, ytm / f);

        let initial_guess = terms.coupon_rate() / f;

        match newton_raphson(objective, derivative, initial_guess, &self.config) {
            Ok(result) => {
                check_discount_base(result.root / f, "yield")?;
                debug!(
                    ytm = result.root,
                    iterations = result.iterations,
                    "yield solved"
                );
                Ok(YieldResult {
                    yield_value: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                    converged: true,
                })
            }
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
                last,
            }) if !self.strict_convergence => {
                check_discount_base(last / f, "yield")?;
                warn!(
                    iterations,
                    last_estimate = last,
                    residual,
                    "yield did not converge, using last iterate"
                );
                Ok(YieldResult {
                    yield_value: last,
                    iterations,
                    residual,
                    converged: false,
                })
            }
            Err(e) => Err(BondError::from_math("yield", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price_from_yield;
    use approx::assert_relative_eq;
    use bondscope_core::types::{Date, Frequency};

    fn terms(face: f64, coupon: f64, freq: Frequency, maturity: (i32, u32, u32)) -> BondTerms {
        BondTerms::builder()
            .face_value(face)
            .coupon_rate(coupon)
            .frequency(freq)
            .settlement(Date::from_ymd(2020, 1, 1).unwrap())
            .maturity(Date::from_ymd(maturity.0, maturity.1, maturity.2).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_discount_price_yields_above_coupon() {
        let t = terms(1000.0, 0.08, Frequency::SemiAnnual, (2026, 1, 1));
        let result = YieldSolver::new().solve(&t, 911.37).unwrap();

        assert!(result.converged);
        assert!(result.yield_value > 0.08);
        assert_relative_eq!(result.yield_value, 0.1, epsilon = 1e-4);
    }

    #[test]
    fn test_par_price_recovers_coupon() {
        let t = terms(100.0, 0.05, Frequency::Annual, (2030, 1, 1));
        let result = YieldSolver::new().solve(&t, 100.0).unwrap();
        assert_relative_eq!(result.yield_value, 0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_roundtrip() {
        let t = terms(1000.0, 0.06, Frequency::Quarterly, (2032, 7, 1));
        let price = price_from_yield(&t, 0.045).unwrap();
        let result = YieldSolver::new().solve(&t, price).unwrap();
        assert_relative_eq!(result.yield_value, 0.045, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_coupon_converges() {
        let t = terms(1000.0, 0.0, Frequency::SemiAnnual, (2030, 1, 1));
        let result = YieldSolver::new().solve(&t, 600.0).unwrap();

        assert!(result.converged);
        // 1000 / (1 + y/2)^20 = 600
        let exact = 2.0 * ((1000.0_f64 / 600.0).powf(1.0 / 20.0) - 1.0);
        assert_relative_eq!(result.yield_value, exact, epsilon = 1e-5);
    }

    #[test]
    fn test_no_periods_is_undefined() {
        let t = terms(1000.0, 0.05, Frequency::SemiAnnual, (2020, 1, 1));
        let err = YieldSolver::new().solve(&t, 1000.0).unwrap_err();
        assert!(matches!(
            err,
            BondError::NumericallyUndefined {
                quantity: "yield",
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_price_is_undefined() {
        let t = terms(1000.0, 0.05, Frequency::SemiAnnual, (2030, 1, 1));
        for price in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                YieldSolver::new().solve(&t, price),
                Err(BondError::NumericallyUndefined { .. })
            ));
        }
    }

    #[test]
    fn test_iteration_cap_lenient() {
        let t = terms(1000.0, 0.08, Frequency::Monthly, (2030, 1, 1));
        let result = YieldSolver::new()
            .with_max_iterations(2)
            .solve(&t, 800.0)
            .unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 2);
        // moved up from the seed but still far from the answer
        assert!(result.yield_value > 0.08 / 12.0);
        assert!(result.residual.abs() > 1.0);
    }

    #[test]
    fn test_iteration_cap_strict() {
        let t = terms(1000.0, 0.08, Frequency::Monthly, (2030, 1, 1));
        let err = YieldSolver::new()
            .with_max_iterations(2)
            .with_strict_convergence(true)
            .solve(&t, 800.0)
            .unwrap_err();

        assert!(matches!(
            err,
            BondError::YieldConvergenceFailed { iterations: 2, .. }
        ));
    }
}
