use serde_json::Value;
use std::io;

use super::leaf_to_string;

/// Write output as CSV to stdout. Envelopes flatten to field,value rows;
/// embedded row arrays are appended with their own header row.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match target {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                if !matches!(val, Value::Array(_)) {
                    let _ = wtr.write_record([key.as_str(), &leaf_to_string(val)]);
                }
            }
            for val in map.values() {
                if let Value::Array(rows) = val {
                    write_rows(&mut wtr, rows);
                }
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows),
        _ => {
            let _ = wtr.write_record([&leaf_to_string(target)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            let _ = wtr.write_record([&leaf_to_string(row)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(leaf_to_string).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
