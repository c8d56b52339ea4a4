use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fuel_subsidy_core::engine::sweep::{self, SweepInput};
use fuel_subsidy_core::TariffConfig;

use crate::input;

/// Arguments for a monthly spend sweep
#[derive(Args)]
pub struct SweepArgs {
    /// Fuel tank capacity in litres
    #[arg(long)]
    pub tank: Option<Decimal>,

    /// Lowest monthly spend to evaluate
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Highest monthly spend to evaluate (always included)
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Spend increment between rows
    #[arg(long, default_value = "50")]
    pub step: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sweep(args: SweepArgs, tariff: &TariffConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let sweep_input: SweepInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.tank.is_none() && args.min.is_none() && args.max.is_none() {
        match input::stdin::read_stdin()? {
            Some(data) => serde_json::from_value(data)?,
            None => return Err("--tank is required (or provide --input)".into()),
        }
    } else {
        SweepInput {
            tank_capacity_litres: args
                .tank
                .ok_or("--tank is required (or provide --input)")?,
            min_monthly_cost: args.min.ok_or("--min is required (or provide --input)")?,
            max_monthly_cost: args.max.ok_or("--max is required (or provide --input)")?,
            step: args.step,
        }
    };

    let result = sweep::sweep_monthly_cost(&sweep_input, tariff)?;
    Ok(serde_json::to_value(result)?)
}
