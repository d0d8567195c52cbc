//! Valuation engine configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use bondscope_bonds::pricing::YieldSolver;
use bondscope_bonds::spreads::{BenchmarkResolver, DEFAULT_MAX_ATTEMPTS};
use bondscope_bonds::{TenorCutoffs, ValuationEngine};
use bondscope_traits::BenchmarkSource;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Default public endpoint of the benchmark series API.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org";

// =============================================================================
// SOLVER
// =============================================================================

/// Yield solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Stop once a Newton step is smaller than this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration cap.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Fail instead of returning the last iterate at the cap.
    #[serde(default)]
    pub strict_convergence: bool,
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> u32 {
    1000
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            strict_convergence: false,
        }
    }
}

impl SolverSettings {
    /// Builds the yield solver these settings describe.
    pub fn yield_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
            .with_strict_convergence(self.strict_convergence)
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance > 1e-2 {
            errors.push(ValidationError::with_rule(
                "solver.tolerance",
                "Solver tolerance must be between 0 and 1e-2",
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 100_000 {
            errors.push(ValidationError::with_rule(
                "solver.max_iterations",
                "Max iterations must be between 1 and 100000",
                "valid_iterations",
            ));
        }

        errors
    }
}

// =============================================================================
// BENCHMARK
// =============================================================================

/// Benchmark lookup settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSettings {
    /// API key for the remote series endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the remote series endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// CSV file of observations to use instead of the remote endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Dates tried, counting back from settlement.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Timeout for a single request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Give up on the whole lookback after this many seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            file: None,
            max_attempts: default_max_attempts(),
            request_timeout_secs: default_request_timeout_secs(),
            overall_timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for BenchmarkSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("file", &self.file)
            .field("max_attempts", &self.max_attempts)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("overall_timeout_secs", &self.overall_timeout_secs)
            .finish()
    }
}

impl BenchmarkSettings {
    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Deadline for the whole lookback, if any.
    pub fn overall_timeout(&self) -> Option<Duration> {
        self.overall_timeout_secs.map(Duration::from_secs)
    }

    /// Builds a resolver over `source` with these limits.
    pub fn resolver(&self, source: Arc<dyn BenchmarkSource>) -> BenchmarkResolver {
        BenchmarkResolver::new(source)
            .with_max_attempts(self.max_attempts)
            .with_overall_timeout(self.overall_timeout())
    }
}

impl Validate for BenchmarkSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if matches!(self.api_key.as_deref(), Some(key) if key.trim().is_empty()) {
            errors.push(ValidationError::new(
                "benchmark.api_key",
                "API key cannot be empty when set",
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            errors.push(ValidationError::with_rule(
                "benchmark.base_url",
                format!("Base URL '{}' must start with http:// or https://", self.base_url),
                "valid_url",
            ));
        }

        if self.max_attempts == 0 || self.max_attempts > 31 {
            errors.push(ValidationError::with_rule(
                "benchmark.max_attempts",
                "Max attempts must be between 1 and 31",
                "valid_attempts",
            ));
        }

        if self.request_timeout_secs == 0 {
            errors.push(ValidationError::with_rule(
                "benchmark.request_timeout_secs",
                "Request timeout must be positive",
                "positive_timeout",
            ));
        }

        if self.overall_timeout_secs == Some(0) {
            errors.push(ValidationError::with_rule(
                "benchmark.overall_timeout_secs",
                "Overall timeout must be positive when set",
                "positive_timeout",
            ));
        }

        errors
    }
}

// =============================================================================
// TENOR
// =============================================================================

/// Tenor classification settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TenorSettings {
    /// Long-end bucket bounds.
    #[serde(default)]
    pub cutoffs: TenorCutoffs,
}

// =============================================================================
// ENGINE
// =============================================================================

/// Complete engine configuration.
///
/// ```toml
/// [solver]
/// tolerance = 1e-6
/// max_iterations = 1000
///
/// [benchmark]
/// max_attempts = 7
///
/// [tenor]
/// cutoffs = "reference"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Yield solver settings.
    #[serde(default)]
    pub solver: SolverSettings,

    /// Benchmark lookup settings.
    #[serde(default)]
    pub benchmark: BenchmarkSettings,

    /// Tenor settings.
    #[serde(default)]
    pub tenor: TenorSettings,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Render as pretty JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as TOML, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)
    }

    /// Builds a valuation engine, looking benchmarks up in `source` if given.
    pub fn engine(&self, source: Option<Arc<dyn BenchmarkSource>>) -> ValuationEngine {
        let engine = ValuationEngine::without_benchmark()
            .with_solver(self.solver.yield_solver())
            .with_tenor_cutoffs(self.tenor.cutoffs);

        match source {
            Some(source) => engine.with_resolver(self.benchmark.resolver(source)),
            None => engine,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.solver.validate();
        errors.extend(self.benchmark.validate());
        errors
    }
}
