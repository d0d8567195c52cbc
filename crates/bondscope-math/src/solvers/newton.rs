//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops as soon as
/// `|f(x_n) / f'(x_n)| < config.tolerance`. The returned root is the iterate
/// after that final step.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] when the derivative vanishes
/// - [`MathError::NonFinite`] when `f`, `f'` or the iterate stops being finite
/// - [`MathError::ConvergenceFailed`] when `config.max_iterations` steps did
///   not converge; the error carries the last iterate
///
/// # Example
///
/// ```rust
/// use bondscope_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::new(1e-12, 50)).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    if !initial_guess.is_finite() {
        return Err(MathError::NonFinite {
            operation: "initial guess",
            x: initial_guess,
        });
    }

    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite {
                operation: "function",
                x,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFinite {
                operation: "derivative",
                x,
            });
        }

        if dfx.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::NonFinite {
                operation: "iterate",
                x,
            });
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
        x,
    ))
}
