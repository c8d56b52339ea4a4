use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::engine::allocation::allocate_tiers;
use crate::engine::comparison::{compare_costs, AnnualProjection};
use crate::engine::consumption::{derive_consumption, DAYS_PER_MONTH};
use crate::engine::validation::{self, parse_quantity, ValidatedInput};
use crate::tariff::TariffConfig;
use crate::types::{with_metadata, ComputationOutput, Litres, Money};
use crate::FuelSubsidyResult;

/// Everything derived from one (tank capacity, monthly spend) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Litres bought per month at the flat price
    pub monthly_litres: Litres,
    /// Monthly litres over a 30-day month
    pub daily_litres: Litres,
    /// Fill-ups per month, rounded up
    pub refuel_count: u64,
    /// Monthly spend under the flat tariff (echoed input)
    pub current_cost: Money,
    /// Monthly cost of the same litres under the tiered scheme
    pub new_cost: Money,
    /// Monthly cost of the same litres at market price
    pub no_subsidy_cost: Money,
    /// current_cost - new_cost
    pub savings_new_vs_current: Money,
    /// no_subsidy_cost - current_cost
    pub savings_current_vs_market: Money,
    /// no_subsidy_cost - new_cost
    pub savings_new_vs_market: Money,
    /// True iff monthly_litres > subsidy_limit_litres
    pub exceeds_limit: bool,
    pub subsidized_litres: Litres,
    pub unsubsidized_litres: Litres,
    /// Savings figures over twelve identical months
    pub annual: AnnualProjection,
}

/// Run the full pricing pipeline.
///
/// Returns `None` when either input is missing, zero or negative: the
/// caller should render an "awaiting input" state, not zeros. The tariff is
/// used as given; see [`FuelCalculator::new`] for a validated wrapper.
///
/// Inputs are bounded only by `Decimal`'s range (about 7.9e28). A pair whose
/// derived costs or annual figures would leave that range also returns
/// `None`, and is logged at warn level so it can be told apart from an
/// empty entry.
pub fn calculate(
    tank_capacity_litres: Option<Decimal>,
    monthly_cost: Option<Decimal>,
    tariff: &TariffConfig,
) -> Option<CalculationResult> {
    let Some(input) = validation::validate(tank_capacity_litres, monthly_cost) else {
        tracing::debug!("calculation skipped: awaiting valid tank capacity and monthly cost");
        return None;
    };

    let result = compute(&input, tariff);
    if result.is_none() {
        tracing::warn!(
            tank_capacity_litres = %input.tank_capacity_litres,
            monthly_cost = %input.monthly_cost,
            "calculation out of decimal range"
        );
    }
    result
}

/// Same as [`calculate`] but starting from user-entered text. Unparsable
/// text is indistinguishable from a non-positive value.
pub fn calculate_str(
    tank_capacity_litres: &str,
    monthly_cost: &str,
    tariff: &TariffConfig,
) -> Option<CalculationResult> {
    calculate(
        parse_quantity(tank_capacity_litres),
        parse_quantity(monthly_cost),
        tariff,
    )
}

fn compute(input: &ValidatedInput, tariff: &TariffConfig) -> Option<CalculationResult> {
    let consumption = derive_consumption(input, tariff)?;
    let tiers = allocate_tiers(consumption.monthly_litres, tariff)?;
    let comparison = compare_costs(
        consumption.monthly_litres,
        input.monthly_cost,
        tiers.new_cost,
        tariff,
    )?;
    let annual = comparison.annualise()?;

    Some(CalculationResult {
        monthly_litres: consumption.monthly_litres,
        daily_litres: consumption.daily_litres,
        refuel_count: consumption.refuel_count,
        current_cost: input.monthly_cost,
        new_cost: tiers.new_cost,
        no_subsidy_cost: comparison.no_subsidy_cost,
        savings_new_vs_current: comparison.savings_new_vs_current,
        savings_current_vs_market: comparison.savings_current_vs_market,
        savings_new_vs_market: comparison.savings_new_vs_market,
        exceeds_limit: tiers.exceeds_limit,
        subsidized_litres: tiers.subsidized_litres,
        unsubsidized_litres: tiers.unsubsidized_litres,
        annual,
    })
}

// ---------------------------------------------------------------------------
// Calculator bound to a validated tariff
// ---------------------------------------------------------------------------

/// A tariff checked once at construction, reused for every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuelCalculator {
    tariff: TariffConfig,
}

#[derive(Serialize)]
struct CalculationAssumptions<'a> {
    tariff: &'a TariffConfig,
    tank_capacity_litres: Decimal,
    monthly_cost: Decimal,
    days_per_month: Decimal,
}

impl FuelCalculator {
    pub fn new(tariff: TariffConfig) -> FuelSubsidyResult<Self> {
        tariff.validate()?;
        Ok(Self { tariff })
    }

    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }

    pub fn calculate(
        &self,
        tank_capacity_litres: Option<Decimal>,
        monthly_cost: Option<Decimal>,
    ) -> Option<CalculationResult> {
        calculate(tank_capacity_litres, monthly_cost, &self.tariff)
    }

    pub fn calculate_str(
        &self,
        tank_capacity_litres: &str,
        monthly_cost: &str,
    ) -> Option<CalculationResult> {
        calculate_str(tank_capacity_litres, monthly_cost, &self.tariff)
    }

    /// Text-entry form of [`Self::calculate_with_metadata`].
    pub fn calculate_str_with_metadata(
        &self,
        tank_capacity_litres: &str,
        monthly_cost: &str,
    ) -> Option<ComputationOutput<CalculationResult>> {
        self.calculate_with_metadata(
            parse_quantity(tank_capacity_litres),
            parse_quantity(monthly_cost),
        )
    }

    /// Wrap a present result in the standard output envelope, with advisory
    /// warnings for heavy consumers and for drivers who pay more under the
    /// tiered scheme.
    pub fn calculate_with_metadata(
        &self,
        tank_capacity_litres: Option<Decimal>,
        monthly_cost: Option<Decimal>,
    ) -> Option<ComputationOutput<CalculationResult>> {
        let start = Instant::now();
        let result = self.calculate(tank_capacity_litres, monthly_cost)?;
        let warnings = self.warnings_for(&result);

        let assumptions = CalculationAssumptions {
            tariff: &self.tariff,
            tank_capacity_litres: tank_capacity_litres.unwrap_or_default(),
            monthly_cost: monthly_cost.unwrap_or_default(),
            days_per_month: DAYS_PER_MONTH,
        };
        let elapsed = start.elapsed().as_micros() as u64;

        Some(with_metadata(
            "Flat vs tiered fuel subsidy comparison",
            &assumptions,
            warnings,
            elapsed,
            result,
        ))
    }

    fn warnings_for(&self, result: &CalculationResult) -> Vec<String> {
        let mut warnings = Vec::new();
        if result.exceeds_limit {
            warnings.push(format!(
                "Monthly consumption of {} L exceeds the {} L subsidy limit; {} L billed at {}/L",
                result.monthly_litres.round_dp(2),
                self.tariff.subsidy_limit_litres,
                result.unsubsidized_litres.round_dp(2),
                self.tariff.above_limit_price,
            ));
        }
        if result.savings_new_vs_current < Decimal::ZERO {
            warnings.push(format!(
                "Tiered scheme costs {} more per month than the flat tariff",
                result.savings_new_vs_current.abs().round_dp(2),
            ));
        }
        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
