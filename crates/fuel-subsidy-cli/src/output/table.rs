use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell_text, sweep_rows};

/// Format output as tables using the tabled crate.
///
/// Sweep envelopes print one row per spend level; everything else prints
/// as a Field/Value listing followed by warnings and methodology.
pub fn print_table(value: &Value) {
    let Value::Object(envelope) = value else {
        println!("{}", value);
        return;
    };

    if let Some(rows) = sweep_rows(value) {
        print_rows_table(rows);
        if let Some(Value::Object(result)) = envelope.get("result") {
            let summary: Map<String, Value> = result
                .iter()
                .filter(|(k, _)| k.as_str() != "rows")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            print_fields(&summary);
        }
    } else if let Some(Value::Object(result)) = envelope.get("result") {
        print_fields(result);
    } else {
        print_fields(envelope);
    }

    print_notes(envelope);
}

fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        match val {
            // One level of nesting, e.g. the annual projection
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    builder.push_record([format!("{key}.{inner_key}"), cell_text(inner_val)]);
                }
            }
            _ => builder.push_record([key.clone(), cell_text(val)]),
        }
    }
    println!("{}", Table::from(builder));
}

fn print_rows_table(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(cell_text).unwrap_or_default())
                .collect();
            builder.push_record(cells);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
