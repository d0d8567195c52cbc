//! Analyze command implementation.
//!
//! Values a bond from a price or a yield and reports its risk measures,
//! tenor bucket and spread over the matching treasury benchmark.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;

use bondscope_bonds::{BondRecord, Resolution};

use crate::cli::OutputFormat;
use crate::commands::{benchmark_source, load_config, BenchmarkArgs, BondArgs, QuoteArgs};
use crate::output::{format_bps, format_percent, print_header, print_warning, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    #[command(flatten)]
    pub quote: QuoteArgs,

    #[command(flatten)]
    pub benchmark: BenchmarkArgs,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat, config_file: Option<&Path>) -> Result<()> {
    let terms = args.bond.terms()?;
    let quote = args.quote.quote()?;

    let config = load_config(config_file)?;
    let source = benchmark_source(&args.benchmark, &config)?;
    let engine = config.engine(source);

    info!(%quote, "valuing bond");
    let record = engine.value(terms, quote)?;

    if !record.resolution().converged() {
        print_warning("Yield solver hit its iteration cap; yield is the last estimate.");
    }

    match format {
        OutputFormat::Table => {
            print_header("Bond Valuation");
            crate::output::print_output(&summary_rows(&record), format)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&summary_rows(&record), format)?;
        }
        OutputFormat::Minimal => {
            println!(
                "Price: {:.2}, YTM: {}, Modified Duration: {:.4}, Spread: {}",
                record.price(),
                format_percent(record.yield_to_maturity()),
                record.modified_duration(),
                spread_text(&record),
            );
        }
    }

    Ok(())
}

fn spread_text(record: &BondRecord) -> String {
    record
        .spread_bps()
        .map_or_else(|| crate::output::NOT_AVAILABLE.to_string(), format_bps)
}

fn solver_text(resolution: Resolution) -> String {
    match resolution {
        Resolution::PriceFromYield => "closed form (yield given)".to_string(),
        Resolution::YieldFromPrice {
            iterations,
            converged: true,
        } => format!("converged in {iterations} iterations"),
        Resolution::YieldFromPrice { iterations, .. } => {
            format!("not converged after {iterations} iterations")
        }
    }
}

/// Display rows for a valuation.
pub fn summary_rows(record: &BondRecord) -> Vec<KeyValue> {
    let mut results = Vec::new();

    // Bond details
    results.push(KeyValue::from_f64("Face Value", record.face_value(), 2));
    results.push(KeyValue::from_percent("Coupon", record.coupon_rate()));
    results.push(KeyValue::new("Frequency", record.frequency().to_string()));
    results.push(KeyValue::new("Settlement", record.settlement_date().to_string()));
    results.push(KeyValue::new("Maturity", record.maturity_date().to_string()));

    // Pricing
    results.push(KeyValue::from_f64("Price", record.price(), 2));
    results.push(KeyValue::from_percent("Yield to Maturity", record.yield_to_maturity()));
    results.push(KeyValue::new("Solver", solver_text(record.resolution())));

    // Risk metrics
    results.push(KeyValue::from_f64("Macaulay Duration", record.macaulay_duration(), 4));
    results.push(KeyValue::from_f64("Modified Duration", record.modified_duration(), 4));
    results.push(KeyValue::from_f64("Convexity", record.convexity(), 4));

    // Benchmark
    results.push(KeyValue::new("Tenor", record.tenor().label()));
    results.push(KeyValue::optional(
        "Benchmark Yield",
        record.benchmark().and_then(|b| {
            b.rate_f64().map(|rate| {
                format!(
                    "{} ({} on {})",
                    format_percent(rate),
                    b.series,
                    b.observation_date
                )
            })
        }),
    ));
    results.push(KeyValue::optional(
        "Spread",
        record.spread_bps().map(format_bps),
    ));

    results
}
