use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::engine::calculator::calculate;
use crate::error::FuelSubsidyError;
use crate::tariff::TariffConfig;
use crate::types::{with_metadata, ComputationOutput, Litres, Money};
use crate::FuelSubsidyResult;

/// Upper bound on evaluated spend levels per sweep.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Monthly spend range to evaluate for a fixed tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepInput {
    pub tank_capacity_litres: Litres,
    pub min_monthly_cost: Money,
    pub max_monthly_cost: Money,
    pub step: Money,
}

/// One evaluated spend level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRow {
    pub monthly_cost: Money,
    pub monthly_litres: Litres,
    pub new_cost: Money,
    pub no_subsidy_cost: Money,
    pub savings_new_vs_current: Money,
    pub exceeds_limit: bool,
    pub refuel_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOutput {
    pub rows: Vec<SweepRow>,
    /// First swept spend at which the tiered scheme costs more than the flat one
    pub first_costlier_spend: Option<Money>,
}

/// Evaluate the calculator over `min..=max` by `step`. `max` is always
/// included even when the step does not land on it.
pub fn sweep_monthly_cost(
    input: &SweepInput,
    tariff: &TariffConfig,
) -> FuelSubsidyResult<ComputationOutput<SweepOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    tariff.validate()?;
    validate_sweep_input(input)?;

    let spends = generate_spend_levels(input)?;
    let mut rows = Vec::with_capacity(spends.len());
    for spend in spends {
        let result = calculate(Some(input.tank_capacity_litres), Some(spend), tariff).ok_or_else(
            || FuelSubsidyError::InvalidInput {
                field: "max_monthly_cost".into(),
                reason: format!("Spend {spend} is outside the representable range"),
            },
        )?;
        rows.push(SweepRow {
            monthly_cost: spend,
            monthly_litres: result.monthly_litres,
            new_cost: result.new_cost,
            no_subsidy_cost: result.no_subsidy_cost,
            savings_new_vs_current: result.savings_new_vs_current,
            exceeds_limit: result.exceeds_limit,
            refuel_count: result.refuel_count,
        });
    }

    let first_costlier_spend = rows
        .iter()
        .find(|r| r.savings_new_vs_current < Decimal::ZERO)
        .map(|r| r.monthly_cost);

    if !rows.iter().any(|r| r.exceeds_limit) {
        warnings.push(format!(
            "No swept spend exceeds the {} L subsidy limit",
            tariff.subsidy_limit_litres
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly spend sweep under flat vs tiered tariffs",
        &serde_json::json!({
            "tank_capacity_litres": input.tank_capacity_litres,
            "min_monthly_cost": input.min_monthly_cost,
            "max_monthly_cost": input.max_monthly_cost,
            "step": input.step,
            "tariff": tariff,
        }),
        warnings,
        elapsed,
        SweepOutput {
            rows,
            first_costlier_spend,
        },
    ))
}

fn validate_sweep_input(input: &SweepInput) -> FuelSubsidyResult<()> {
    if input.tank_capacity_litres <= Decimal::ZERO {
        return Err(FuelSubsidyError::InvalidInput {
            field: "tank_capacity_litres".into(),
            reason: "Tank capacity must be positive".into(),
        });
    }
    if input.min_monthly_cost <= Decimal::ZERO {
        return Err(FuelSubsidyError::InvalidInput {
            field: "min_monthly_cost".into(),
            reason: "Minimum spend must be positive".into(),
        });
    }
    if input.step <= Decimal::ZERO {
        return Err(FuelSubsidyError::InvalidInput {
            field: "step".into(),
            reason: "Step must be positive".into(),
        });
    }
    if input.min_monthly_cost > input.max_monthly_cost {
        return Err(FuelSubsidyError::InvalidInput {
            field: "min_monthly_cost".into(),
            reason: "Min must be <= max".into(),
        });
    }
    Ok(())
}

fn generate_spend_levels(input: &SweepInput) -> FuelSubsidyResult<Vec<Money>> {
    let too_many = || FuelSubsidyError::InvalidInput {
        field: "step".into(),
        reason: format!("Sweep would exceed {MAX_SWEEP_POINTS} points"),
    };

    let intervals = (input.max_monthly_cost - input.min_monthly_cost)
        .checked_div(input.step)
        .and_then(|n| n.floor().to_usize())
        .ok_or_else(too_many)?;
    if intervals >= MAX_SWEEP_POINTS {
        return Err(too_many());
    }

    let mut values = Vec::with_capacity(intervals + 2);
    let mut current = input.min_monthly_cost;
    while current <= input.max_monthly_cost {
        values.push(current);
        match current.checked_add(input.step) {
            Some(next) => current = next,
            None => break,
        }
    }
    if let Some(&last) = values.last() {
        if last < input.max_monthly_cost {
            values.push(input.max_monthly_cost);
        }
    }
    Ok(values)
}
