use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FuelSubsidyError;
use crate::tariff::TariffConfig;
use crate::types::{with_metadata, ComputationOutput, Litres, Money};
use crate::FuelSubsidyResult;

/// Consumption at which the tiered scheme costs exactly as much as the flat one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenOutput {
    /// Monthly litres at break-even; `None` when the tiered scheme is never costlier
    pub break_even_litres: Option<Litres>,
    /// Monthly spend under the flat tariff at break-even
    pub break_even_monthly_cost: Option<Money>,
    /// Whether the tiered scheme is cheaper or equal at every consumption level
    pub tiered_never_costlier: bool,
}

/// Solve `L * flat = limit * subsidized + (L - limit) * above` for `L`:
///
///   L* = limit * (above - subsidized) / (above - flat)
///
/// Only defined when `above > flat`; otherwise every extra litre beyond the
/// limit is no dearer than today and the tiered scheme always wins.
pub fn break_even(tariff: &TariffConfig) -> FuelSubsidyResult<ComputationOutput<BreakEvenOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    tariff.validate()?;

    let output = if tariff.above_limit_price > tariff.current_flat_price {
        let out_of_range = || FuelSubsidyError::InvalidTariff {
            field: "subsidy_limit_litres".into(),
            reason: "Break-even point is outside the representable range".into(),
        };
        let premium_per_litre = tariff.above_limit_price - tariff.current_flat_price;
        let subsidy_headroom = tariff.above_limit_price - tariff.new_subsidized_price;
        let litres = tariff
            .subsidy_limit_litres
            .checked_mul(subsidy_headroom)
            .and_then(|v| v.checked_div(premium_per_litre))
            .ok_or_else(out_of_range)?;
        let monthly_cost = litres
            .checked_mul(tariff.current_flat_price)
            .ok_or_else(out_of_range)?;

        BreakEvenOutput {
            break_even_litres: Some(litres),
            break_even_monthly_cost: Some(monthly_cost),
            tiered_never_costlier: false,
        }
    } else {
        warnings.push(format!(
            "Above-limit price ({}) does not exceed the flat price ({}); tiered scheme is never costlier",
            tariff.above_limit_price, tariff.current_flat_price
        ));
        BreakEvenOutput {
            break_even_litres: None,
            break_even_monthly_cost: None,
            tiered_never_costlier: true,
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flat vs tiered break-even consumption",
        tariff,
        warnings,
        elapsed,
        output,
    ))
}
