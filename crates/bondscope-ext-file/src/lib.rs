//! # Bondscope Ext File
//!
//! File-based benchmark data for the Bondscope valuation engine.
//!
//! This crate provides default implementations for offline runs and tests:
//! - CSV-based benchmark source
//! - An empty source that never has data
//!
//! For live treasury rates, use `bondscope-ext-fred`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod benchmark_data;

pub use benchmark_data::*;

use std::path::Path;
use std::sync::Arc;

use bondscope_traits::{BenchmarkSource, TraitError};

/// Create a file-based benchmark source, ready for injection into the engine.
pub fn create_file_benchmark_source(
    observations_csv: impl AsRef<Path>,
) -> Result<Arc<dyn BenchmarkSource>, TraitError> {
    Ok(Arc::new(CsvBenchmarkSource::new(observations_csv)?))
}

/// Create a benchmark source with no data (for testing/offline use).
pub fn create_empty_benchmark_source() -> Arc<dyn BenchmarkSource> {
    Arc::new(EmptyBenchmarkSource)
}
