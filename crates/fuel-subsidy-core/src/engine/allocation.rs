use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tariff::TariffConfig;
use crate::types::{Litres, Money};

/// Split of monthly litres across the two tiers of the new scheme, and
/// what that consumption costs under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAllocation {
    pub subsidized_litres: Litres,
    pub unsubsidized_litres: Litres,
    pub exceeds_limit: bool,
    pub new_cost: Money,
}

/// Partition consumption at the subsidy limit.
///
/// Consumption exactly at the limit is entirely subsidized:
///   L <= limit: cost = L * subsidized
///   L >  limit: cost = limit * subsidized + (L - limit) * above_limit
pub fn allocate_tiers(monthly_litres: Litres, tariff: &TariffConfig) -> Option<TierAllocation> {
    if monthly_litres <= tariff.subsidy_limit_litres {
        return Some(TierAllocation {
            subsidized_litres: monthly_litres,
            unsubsidized_litres: Decimal::ZERO,
            exceeds_limit: false,
            new_cost: monthly_litres.checked_mul(tariff.new_subsidized_price)?,
        });
    }

    let subsidized_litres = tariff.subsidy_limit_litres;
    let unsubsidized_litres = monthly_litres - subsidized_litres;
    let subsidized_cost = subsidized_litres.checked_mul(tariff.new_subsidized_price)?;
    let unsubsidized_cost = unsubsidized_litres.checked_mul(tariff.above_limit_price)?;

    Some(TierAllocation {
        subsidized_litres,
        unsubsidized_litres,
        exceeds_limit: true,
        new_cost: subsidized_cost.checked_add(unsubsidized_cost)?,
    })
}
