use napi::Result as NapiResult;
use napi_derive::napi;

use fuel_subsidy_core::engine::breakeven;
use fuel_subsidy_core::engine::sweep::{self, SweepInput};
use fuel_subsidy_core::engine::validation::quantity_from_f64;
use fuel_subsidy_core::{FuelCalculator, TariffConfig};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse an optional tariff override; `None` selects the default tariff.
fn tariff_from_json(tariff_json: Option<String>) -> NapiResult<TariffConfig> {
    match tariff_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error),
        None => Ok(TariffConfig::default()),
    }
}

fn calculator(tariff_json: Option<String>) -> NapiResult<FuelCalculator> {
    FuelCalculator::new(tariff_from_json(tariff_json)?).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Returns the output envelope as JSON, or `null` while the inputs are not
/// both positive numbers.
#[napi]
pub fn calculate_fuel_impact(
    tank_capacity_litres: f64,
    monthly_cost: f64,
    tariff_json: Option<String>,
) -> NapiResult<Option<String>> {
    let output = calculator(tariff_json)?.calculate_with_metadata(
        quantity_from_f64(tank_capacity_litres),
        quantity_from_f64(monthly_cost),
    );
    output
        .map(|o| serde_json::to_string(&o).map_err(to_napi_error))
        .transpose()
}

/// Text-field variant: the raw input values are parsed by the engine. Same
/// envelope as [`calculate_fuel_impact`].
#[napi]
pub fn calculate_fuel_impact_raw(
    tank_capacity_text: String,
    monthly_cost_text: String,
    tariff_json: Option<String>,
) -> NapiResult<Option<String>> {
    let output = calculator(tariff_json)?
        .calculate_str_with_metadata(&tank_capacity_text, &monthly_cost_text);
    output
        .map(|o| serde_json::to_string(&o).map_err(to_napi_error))
        .transpose()
}

// ---------------------------------------------------------------------------
// Analyses
// ---------------------------------------------------------------------------

#[napi]
pub fn sweep_monthly_cost(input_json: String, tariff_json: Option<String>) -> NapiResult<String> {
    let input: SweepInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let tariff = tariff_from_json(tariff_json)?;
    let output = sweep::sweep_monthly_cost(&input, &tariff).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn break_even(tariff_json: Option<String>) -> NapiResult<String> {
    let tariff = tariff_from_json(tariff_json)?;
    let output = breakeven::break_even(&tariff).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn default_tariff() -> NapiResult<String> {
    serde_json::to_string(&TariffConfig::default()).map_err(to_napi_error)
}
