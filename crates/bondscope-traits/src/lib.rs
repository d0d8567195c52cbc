//! # Bondscope Traits
//!
//! Trait definitions for the benchmark data the valuation engine consumes.
//!
//! This crate contains ONLY the contract. Transports live in extension
//! crates (`bondscope-ext-fred` for the remote series API,
//! `bondscope-ext-file` for CSV fixtures).
//!
//! ## Module Structure
//!
//! - [`benchmark`]: [`BenchmarkSource`], the per-attempt [`Observation`]
//!   outcome and the observation-value parsing contract
//! - [`ids`]: [`SeriesId`]
//! - [`error`]: [`TraitError`]
//!
//! ## Dependency Injection
//!
//! The engine receives a source at construction:
//!
//! ```ignore
//! let source = Arc::new(FredSource::new(api_key)?);
//! let engine = ValuationEngine::new(source);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod benchmark;
pub mod error;
pub mod ids;

// Re-export commonly used types
pub use benchmark::{
    parse_observation_value, BenchmarkSource, Observation, SourceType, MISSING_VALUE_SENTINEL,
};
pub use error::TraitError;
pub use ids::SeriesId;
