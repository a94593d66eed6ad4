use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::leaf_to_string;

/// Format output as tables using the tabled crate.
///
/// Computation envelopes get a Field/Value table for the scalar result
/// fields, one table per embedded row array (e.g. receipt line items), and
/// any warnings and the methodology line after.
pub fn print_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", value);
        return;
    };

    match map.get("result") {
        Some(result) => {
            print_section(result);
            print_envelope_notes(map);
        }
        None => print_section(value),
    }
}

fn print_section(value: &Value) {
    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                if !matches!(val, Value::Array(_)) {
                    builder.push_record([key.as_str(), &leaf_to_string(val)]);
                }
            }
            println!("{}", Table::from(builder));

            // Row arrays (such as settlement line items) as their own tables
            for (key, val) in map {
                if let Value::Array(rows) = val {
                    println!("\n{}:", key);
                    print_rows(rows);
                }
            }
        }
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", leaf_to_string(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(leaf_to_string).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("{}", Table::from(builder));
}

fn print_envelope_notes(envelope: &serde_json::Map<String, Value>) {
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

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}
