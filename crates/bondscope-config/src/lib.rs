//! Bondscope Configuration Layer
//!
//! Configuration for the Bondscope valuation engine: yield solver limits,
//! benchmark lookup settings and tenor bucket bounds, loaded from TOML.
//!
//! # Features
//!
//! - **Solver Configuration**: tolerance, iteration cap, strict convergence
//! - **Benchmark Configuration**: API key, endpoint, lookback attempts, timeouts
//! - **Tenor Configuration**: reference or calendar long-end cutoffs
//! - **Validation**: every loaded file is checked before use
//!
//! # Example
//!
//! ```rust
//! use bondscope_config::{EngineConfig, Validate};
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     [solver]
//!     max_iterations = 500
//!
//!     [benchmark]
//!     max_attempts = 7
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! let engine = config.engine(None);
//! # let _ = engine;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod engine;
pub mod error;

pub use engine::{BenchmarkSettings, EngineConfig, SolverSettings, TenorSettings, DEFAULT_BASE_URL};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
