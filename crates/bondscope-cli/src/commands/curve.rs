//! Curve command implementation.
//!
//! Samples the duration and convexity price approximations around a bond's
//! yield. The benchmark is never looked up here.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondscope_bonds::curve::{CurvePoint, PriceYieldCurve};

use crate::cli::OutputFormat;
use crate::commands::{load_config, BondArgs, QuoteArgs};
use crate::output::{print_header, print_info};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    #[command(flatten)]
    pub quote: QuoteArgs,

    /// Print every n-th point only
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub every: u32,
}

/// One row of curve output.
#[derive(Debug, Serialize, Tabled)]
struct CurveRow {
    #[tabled(rename = "Yield (%)")]
    yield_pct: String,
    #[tabled(rename = "Duration Price")]
    duration_price: String,
    #[tabled(rename = "Convexity Price")]
    convexity_price: String,
}

impl From<&CurvePoint> for CurveRow {
    fn from(point: &CurvePoint) -> Self {
        Self {
            yield_pct: format!("{:.4}", point.yield_value * 100.0),
            duration_price: format!("{:.4}", point.duration_price),
            convexity_price: format!("{:.4}", point.convexity_price),
        }
    }
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat, config_file: Option<&Path>) -> Result<()> {
    let terms = args.bond.terms()?;
    let quote = args.quote.quote()?;

    let config = load_config(config_file)?;
    let record = config.engine(None).value(terms, quote)?;
    let curve = PriceYieldCurve::sample(&record);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&curve)?);
        }
        _ => {
            let rows: Vec<CurveRow> = curve
                .points()
                .iter()
                .step_by(args.every as usize)
                .map(CurveRow::from)
                .collect();

            if format == OutputFormat::Table {
                print_header("Price-Yield Approximation");
                print_info(&format!(
                    "Price {:.2} at yield {:.4}%",
                    curve.price(),
                    curve.yield_value() * 100.0
                ));
            }
            crate::output::print_output(&rows, format)?;
        }
    }

    Ok(())
}
