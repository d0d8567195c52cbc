//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod curve;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use config::ConfigArgs;
pub use curve::CurveArgs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use tracing::{info, warn};

use bondscope_bonds::{BondTerms, Quote};
use bondscope_config::EngineConfig;
use bondscope_core::{Date, Frequency};
use bondscope_ext_file::CsvBenchmarkSource;
use bondscope_ext_fred::FredSource;
use bondscope_traits::BenchmarkSource;

use crate::error::{CliError, CliResult};

// =============================================================================
// SHARED ARGUMENTS
// =============================================================================

/// Contractual terms of the bond.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Face (par) value
    #[arg(long, default_value = "1000")]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 7.0 for 7%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Settlement date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub settlement: Option<String>,

    /// Coupons per year (1, 2, 3, 4, 6, 12) or a name such as semi-annual
    #[arg(long, default_value = "2")]
    pub frequency: String,
}

/// The one market value supplied: price or yield.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct QuoteArgs {
    /// Market price (same units as face value)
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Yield to maturity (as percentage, e.g., 9.0 for 9%)
    #[arg(short, long = "yield")]
    pub yield_value: Option<f64>,
}

/// Where benchmark treasury rates come from.
#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    /// FRED API key for live treasury rates
    #[arg(long, env = "FRED_API_KEY", hide_env_values = true)]
    pub fred_api_key: Option<String>,

    /// CSV file of `series_id,date,value` benchmark observations
    #[arg(long, conflicts_with = "offline")]
    pub benchmark_file: Option<PathBuf>,

    /// Skip the benchmark lookup entirely
    #[arg(long)]
    pub offline: bool,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Rejects negative and non-numeric values.
pub fn validate_non_negative(field: &'static str, value: f64) -> CliResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CliError::NotNonNegative { field, value });
    }
    Ok(value)
}

/// Validates a coupon percentage.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    validate_non_negative("coupon", coupon)?;
    if coupon >= 100.0 {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Parses a coupon frequency.
pub fn parse_frequency(s: &str) -> CliResult<Frequency> {
    s.parse().map_err(|_| CliError::InvalidFrequency(s.to_string()))
}

/// Settlement must not fall after maturity or after today.
pub fn validate_settlement(settlement: Date, maturity: Date, today: Date) -> CliResult<()> {
    if settlement > maturity {
        return Err(CliError::SettlementAfterMaturity {
            settlement,
            maturity,
        });
    }
    if settlement > today {
        return Err(CliError::SettlementInFuture { settlement, today });
    }
    Ok(())
}

impl BondArgs {
    /// Validates the arguments and builds the bond terms.
    pub fn terms(&self) -> anyhow::Result<BondTerms> {
        let face = validate_non_negative("face value", self.face)?;
        let coupon = validate_coupon(self.coupon)?;
        let maturity = parse_date(&self.maturity)?;
        let today = Date::today();
        let settlement = match self.settlement {
            Some(ref s) => parse_date(s)?,
            None => today,
        };
        let frequency = parse_frequency(&self.frequency)?;

        validate_settlement(settlement, maturity, today)?;

        Ok(BondTerms::builder()
            .face_value(face)
            .coupon_rate(coupon / 100.0)
            .frequency(frequency)
            .settlement(settlement)
            .maturity(maturity)
            .build()?)
    }
}

impl QuoteArgs {
    /// Validates the quoted value, converting a yield percentage to a fraction.
    pub fn quote(&self) -> CliResult<Quote> {
        match (self.price, self.yield_value) {
            (Some(price), _) => Ok(Quote::Price(validate_non_negative("price", price)?)),
            (None, Some(y)) => Ok(Quote::Yield(validate_non_negative("yield", y)? / 100.0)),
            // clap enforces exactly one
            (None, None) => Err(CliError::Config("either --price or --yield is required".into())),
        }
    }
}

// =============================================================================
// ENGINE WIRING
// =============================================================================

/// Default config file location.
pub fn config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".into()))?;
    Ok(home.join("bondscope").join("config.toml"))
}

/// Loads the engine configuration.
///
/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> CliResult<EngineConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = config_path()?;
            if !path.exists() {
                return Ok(EngineConfig::default());
            }
            path
        }
    };

    info!(path = %path.display(), "loading configuration");
    EngineConfig::from_file(&path).map_err(|e| CliError::Config(e.to_string()))
}

/// Picks the benchmark source for this run, if any.
///
/// Order: `--offline`, then a benchmark file (flag, then config), then a
/// FRED key (flag or env, then config).
pub fn benchmark_source(
    args: &BenchmarkArgs,
    config: &EngineConfig,
) -> CliResult<Option<Arc<dyn BenchmarkSource>>> {
    if args.offline {
        return Ok(None);
    }

    if let Some(file) = args.benchmark_file.as_ref().or(config.benchmark.file.as_ref()) {
        let source =
            CsvBenchmarkSource::new(file).map_err(|e| CliError::Benchmark(e.to_string()))?;
        return Ok(Some(Arc::new(source)));
    }

    let api_key = args
        .fred_api_key
        .as_deref()
        .or(config.benchmark.api_key.as_deref())
        .filter(|key| !key.trim().is_empty());

    match api_key {
        Some(key) => {
            let source = FredSource::with_options(
                key,
                &config.benchmark.base_url,
                config.benchmark.request_timeout(),
            )
            .map_err(|e| CliError::Benchmark(e.to_string()))?;
            Ok(Some(Arc::new(source)))
        }
        None => {
            warn!("no benchmark source configured; spread will not be available");
            Ok(None)
        }
    }
}
