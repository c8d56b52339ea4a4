use serde_json::Value;

use super::cell_text;

/// Fields that answer "what changes for me", in order of preference.
const PRIORITY_KEYS: [&str; 4] = [
    "savings_new_vs_current",
    "first_costlier_spend",
    "break_even_monthly_cost",
    "message",
];

/// Print just the headline figure of the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", cell_text(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, cell_text(val));
            return;
        }
    }

    println!("{}", cell_text(result_obj));
}
