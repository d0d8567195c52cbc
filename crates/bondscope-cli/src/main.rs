//! Bondscope CLI - bond valuation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond from a yield
//! bondscope analyze --face 1000 --coupon 7 --frequency 1 \
//!     --settlement 2020-01-01 --maturity 2035-12-31 --yield 9 --offline
//!
//! # Solve the yield from a price, with the spread over FRED treasuries
//! FRED_API_KEY=... bondscope analyze --coupon 8 --settlement 2020-01-01 \
//!     --maturity 2026-01-01 --price 911.37
//!
//! # Sample the duration and convexity approximation lines
//! bondscope curve --coupon 7 --maturity 2035-12-31 --yield 9 --format csv
//!
//! # Write a default configuration file
//! bondscope config init
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table/json/csv output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let format = cli.format;
    let config = cli.config.as_deref();

    // Execute command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format, config)?,
        Commands::Curve(args) => commands::curve::execute(args, format, config)?,
        Commands::Config(args) => commands::config::execute(args, format, config)?,
    }

    Ok(())
}
