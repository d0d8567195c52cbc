//! Config command implementation.
//!
//! Shows, locates and initialises the engine configuration file.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use bondscope_config::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::{config_path, load_config};
use crate::output::{print_header, print_info, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, config_file: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format, config_file),
        ConfigCommand::Path => execute_path(config_file),
        ConfigCommand::Init(init_args) => execute_init(&init_args, config_file),
    }
}

fn setting_rows(config: &EngineConfig) -> Vec<KeyValue> {
    let solver = &config.solver;
    let benchmark = &config.benchmark;

    vec![
        KeyValue::new("solver.tolerance", solver.tolerance.to_string()),
        KeyValue::new("solver.max_iterations", solver.max_iterations.to_string()),
        KeyValue::new("solver.strict_convergence", solver.strict_convergence.to_string()),
        KeyValue::new(
            "benchmark.api_key",
            if benchmark.api_key.is_some() { "(set)" } else { "(not set)" },
        ),
        KeyValue::new("benchmark.base_url", benchmark.base_url.clone()),
        KeyValue::new(
            "benchmark.file",
            benchmark
                .file
                .as_ref()
                .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string()),
        ),
        KeyValue::new("benchmark.max_attempts", benchmark.max_attempts.to_string()),
        KeyValue::new(
            "benchmark.request_timeout_secs",
            benchmark.request_timeout_secs.to_string(),
        ),
        KeyValue::new(
            "benchmark.overall_timeout_secs",
            benchmark
                .overall_timeout_secs
                .map_or_else(|| "(none)".to_string(), |s| s.to_string()),
        ),
        KeyValue::new("tenor.cutoffs", config.tenor.cutoffs.to_string()),
    ]
}

/// Show the effective configuration.
fn execute_show(format: OutputFormat, config_file: Option<&Path>) -> Result<()> {
    let config = load_config(config_file)?;

    match format {
        OutputFormat::Table => {
            print_header("Engine Configuration");
            crate::output::print_output(&setting_rows(&config), format)?;
        }
        OutputFormat::Json => {
            let mut redacted = config.clone();
            redacted.benchmark.api_key = redacted.benchmark.api_key.map(|_| "***".to_string());
            println!("{}", redacted.to_json_string()?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&setting_rows(&config), format)?;
        }
        OutputFormat::Minimal => {
            for row in setting_rows(&config) {
                println!("{}={}", row.key, row.value);
            }
        }
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(config_file: Option<&Path>) -> Result<()> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: &InitArgs, config_file: Option<&Path>) -> Result<()> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };

    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config file {} already exists. Use --force to overwrite.",
            path.display()
        ));
    }

    EngineConfig::default().save(&path)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
