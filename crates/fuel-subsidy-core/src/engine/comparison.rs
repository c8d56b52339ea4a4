use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::tariff::TariffConfig;
use crate::types::{Litres, Money};

const MONTHS_PER_YEAR: Money = dec!(12);

/// Monthly cost of each scheme side by side, with the differences between them.
///
/// Positive savings mean the second-named scheme is cheaper than the first:
/// `savings_new_vs_current > 0` when the tiered scheme beats the flat one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComparison {
    pub no_subsidy_cost: Money,
    pub savings_new_vs_current: Money,
    pub savings_current_vs_market: Money,
    pub savings_new_vs_market: Money,
}

/// The three monthly savings figures projected over twelve identical months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualProjection {
    pub savings_new_vs_current: Money,
    pub savings_current_vs_market: Money,
    pub savings_new_vs_market: Money,
}

pub fn compare_costs(
    monthly_litres: Litres,
    current_cost: Money,
    new_cost: Money,
    tariff: &TariffConfig,
) -> Option<CostComparison> {
    let no_subsidy_cost = monthly_litres.checked_mul(tariff.market_price)?;
    Some(CostComparison {
        no_subsidy_cost,
        savings_new_vs_current: current_cost.checked_sub(new_cost)?,
        savings_current_vs_market: no_subsidy_cost.checked_sub(current_cost)?,
        savings_new_vs_market: no_subsidy_cost.checked_sub(new_cost)?,
    })
}

impl CostComparison {
    pub fn annualise(&self) -> Option<AnnualProjection> {
        Some(AnnualProjection {
            savings_new_vs_current: self.savings_new_vs_current.checked_mul(MONTHS_PER_YEAR)?,
            savings_current_vs_market: self
                .savings_current_vs_market
                .checked_mul(MONTHS_PER_YEAR)?,
            savings_new_vs_market: self.savings_new_vs_market.checked_mul(MONTHS_PER_YEAR)?,
        })
    }
}
