use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use fuel_subsidy_core::engine::validation::parse_quantity;
use fuel_subsidy_core::{FuelCalculator, TariffConfig};

use crate::input;

/// Arguments for a single-driver cost comparison
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CalculateArgs {
    /// Fuel tank capacity in litres (e.g. 50)
    #[arg(long, alias = "tank-size")]
    pub tank: Option<String>,

    /// Current monthly fuel spending (e.g. 300)
    #[arg(long)]
    pub monthly_cost: Option<String>,

    /// Path to JSON input file with tank_capacity_litres and monthly_cost
    #[arg(long)]
    pub input: Option<String>,
}

/// Shown instead of a result while either input is missing or not positive.
fn awaiting_input() -> Value {
    json!({
        "status": "awaiting_input",
        "message": "Enter your fuel tank size and monthly spending to see your cost comparison",
    })
}

/// Read a quantity from JSON that may hold a number or user-typed text.
fn quantity_field(data: &Value, key: &str) -> Option<Decimal> {
    match data.get(key)? {
        Value::Number(n) => parse_quantity(&n.to_string()),
        Value::String(s) => parse_quantity(s),
        _ => None,
    }
}

fn quantities_from_json(data: &Value) -> (Option<Decimal>, Option<Decimal>) {
    (
        quantity_field(data, "tank_capacity_litres"),
        quantity_field(data, "monthly_cost"),
    )
}

pub fn run_calculate(
    args: CalculateArgs,
    tariff: &TariffConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let (tank, monthly_cost) = if let Some(ref path) = args.input {
        quantities_from_json(&input::file::read_json_value(path)?)
    } else if args.tank.is_none() && args.monthly_cost.is_none() {
        match input::stdin::read_stdin()? {
            Some(data) => quantities_from_json(&data),
            None => (None, None),
        }
    } else {
        (
            args.tank.as_deref().and_then(parse_quantity),
            args.monthly_cost.as_deref().and_then(parse_quantity),
        )
    };

    let calculator = FuelCalculator::new(tariff.clone())?;
    match calculator.calculate_with_metadata(tank, monthly_cost) {
        Some(output) => Ok(serde_json::to_value(output)?),
        None => {
            tracing::debug!("no result for the given input");
            Ok(awaiting_input())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_numbers_and_text_both_accepted() {
        let data = json!({"tank_capacity_litres": 50, "monthly_cost": "300.50"});
        assert_eq!(
            quantities_from_json(&data),
            (Some(dec!(50)), Some(dec!(300.50)))
        );
    }

    #[test]
    fn test_json_missing_or_odd_types_are_none() {
        let data = json!({"tank_capacity_litres": true});
        assert_eq!(quantities_from_json(&data), (None, None));
    }

    #[test]
    fn test_flags_produce_envelope() {
        let args = CalculateArgs {
            tank: Some("50".into()),
            monthly_cost: Some("300".into()),
            input: None,
        };
        let value = run_calculate(args, &TariffConfig::default()).unwrap();
        assert_eq!(value["result"]["exceeds_limit"], false);
        assert_eq!(value["result"]["refuel_count"], 3);
    }

    #[test]
    fn test_bad_flags_produce_awaiting_input() {
        let args = CalculateArgs {
            tank: Some("50".into()),
            monthly_cost: Some("abc".into()),
            input: None,
        };
        let value = run_calculate(args, &TariffConfig::default()).unwrap();
        assert_eq!(value["status"], "awaiting_input");
        assert!(value.get("result").is_none());
    }
}
