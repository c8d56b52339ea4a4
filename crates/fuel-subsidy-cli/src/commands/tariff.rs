use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use fuel_subsidy_core::engine::breakeven::{break_even, BreakEvenOutput};
use fuel_subsidy_core::{with_metadata, TariffConfig};

#[derive(Serialize)]
struct TariffSummary<'a> {
    #[serde(flatten)]
    tariff: &'a TariffConfig,
    #[serde(flatten)]
    break_even: BreakEvenOutput,
}

pub fn run_tariff(tariff: &TariffConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let analysis = break_even(tariff)?;
    let summary = TariffSummary {
        tariff,
        break_even: analysis.result,
    };
    let elapsed = start.elapsed().as_micros() as u64;
    let output = with_metadata(
        &analysis.methodology,
        &analysis.assumptions,
        analysis.warnings,
        elapsed,
        summary,
    );
    Ok(serde_json::to_value(output)?)
}
