//! Bond pricing calculations.
//!
//! This module provides:
//! - [`price_from_yield`]: closed-form price from an annual yield
//! - [`YieldSolver`]: yield-to-maturity from a price
//! - [`YieldResult`]: solver outcome, including whether it converged

mod price;
mod yield_solver;

pub use price::price_from_yield;
pub use yield_solver::{YieldResult, YieldSolver};

pub(crate) use price::check_discount_base;
