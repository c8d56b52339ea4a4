use serde_json::Value;
use std::io;

use super::{cell_text, sweep_rows};

/// Write output as CSV to stdout.
///
/// Sweeps become one record per spend level; single results become
/// two-column field,value records with nested keys dotted.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(rows) = sweep_rows(value) {
        write_rows(&mut wtr, rows);
    } else {
        let fields = value.get("result").unwrap_or(value);
        let _ = wtr.write_record(["field", "value"]);
        if let Value::Object(map) = fields {
            for (key, val) in map {
                match val {
                    Value::Object(inner) => {
                        for (inner_key, inner_val) in inner {
                            let _ = wtr.write_record([
                                format!("{key}.{inner_key}"),
                                cell_text(inner_val),
                            ]);
                        }
                    }
                    _ => {
                        let _ = wtr.write_record([key.as_str(), &cell_text(val)]);
                    }
                }
            }
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(cell_text).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&cells);
        }
    }
}
