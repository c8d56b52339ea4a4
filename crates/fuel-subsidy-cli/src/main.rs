mod commands;
mod input;
mod output;
mod settings;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::calculate::CalculateArgs;
use commands::sweep::SweepArgs;

/// Compare monthly fuel costs under flat and tiered subsidy schemes
#[derive(Parser)]
#[command(
    name = "fuelcalc",
    version,
    about = "Compare monthly fuel costs under flat and tiered subsidy schemes",
    long_about = "Estimates how a move from an unlimited flat fuel subsidy to a tiered \
                  scheme (subsidized price for the first N litres per month) changes a \
                  driver's monthly bill, with a no-subsidy market-price baseline."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Tariff config file (TOML, YAML or JSON); defaults to config/tariff.* if present
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log filter level (e.g. debug); falls back to RUST_LOG, then warn
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare current, tiered and no-subsidy monthly costs for one driver
    Calculate(CalculateArgs),
    /// Evaluate a range of monthly spends for a fixed tank
    Sweep(SweepArgs),
    /// Show the active tariff and its break-even consumption
    Tariff,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    Csv,
    Minimal,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(format!("fuelcalc={level},fuel_subsidy_core={level}")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let tariff = || settings::load_tariff(cli.config.as_deref());

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => {
            tariff().and_then(|t| commands::calculate::run_calculate(args, &t))
        }
        Commands::Sweep(args) => tariff().and_then(|t| commands::sweep::run_sweep(args, &t)),
        Commands::Tariff => tariff().and_then(|t| commands::tariff::run_tariff(&t)),
        Commands::Version => {
            println!("fuelcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
