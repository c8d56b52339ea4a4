use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::validation::ValidatedInput;
use crate::tariff::TariffConfig;
use crate::types::Litres;

/// Fixed month length used for the daily figure. Not calendar-aware.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// Fuel volumes implied by the current monthly spend at the flat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumption {
    pub monthly_litres: Litres,
    pub daily_litres: Litres,
    pub refuel_count: u64,
}

/// Convert spend into litres under the flat tariff.
///
/// Returns `None` only if the division leaves Decimal's range.
pub fn derive_consumption(input: &ValidatedInput, tariff: &TariffConfig) -> Option<Consumption> {
    let monthly_litres = input.monthly_cost.checked_div(tariff.current_flat_price)?;
    let daily_litres = monthly_litres / DAYS_PER_MONTH;
    let refuel_count = refuel_count(monthly_litres, input.tank_capacity_litres);

    Some(Consumption {
        monthly_litres,
        daily_litres,
        refuel_count,
    })
}

/// ceil(monthly / tank), at least 1 for any non-zero consumption.
/// Saturates at `u64::MAX` for degenerate tank sizes.
fn refuel_count(monthly_litres: Litres, tank_capacity_litres: Litres) -> u64 {
    if monthly_litres.is_zero() {
        return 0;
    }
    monthly_litres
        .checked_div(tank_capacity_litres)
        .and_then(|tanks| tanks.ceil().to_u64())
        .unwrap_or(u64::MAX)
        .max(1)
}
