//! # Bondscope Math
//!
//! Numerical utilities for the Bondscope bond analytics engine.
//!
//! - **Solvers**: Newton-Raphson root finding with step-size convergence,
//!   explicit degeneracy errors and an observable iteration cap

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
