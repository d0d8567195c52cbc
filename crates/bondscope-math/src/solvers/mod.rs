//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence near the root, requires the
//!   derivative
//!
//! # Example: yield from price
//!
//! ```rust
//! use bondscope_math::solvers::{newton_raphson, SolverConfig};
//!
//! // 5-year annual bond, 5% coupon, price 95
//! let f = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv + 100.0 / (1.0 + y).powi(5) - 95.0
//! };
//! let df = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv - 5.0 * 100.0 / (1.0 + y).powi(6)
//! };
//!
//! let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // discount bond
//! ```

mod newton;

pub use newton::newton_raphson;

/// Default step tolerance for root-finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on the absolute step size.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_matches_yield_conventions() {
        let config = SolverConfig::default();
        assert!((config.tolerance - 1e-6).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 1000);
    }
}
