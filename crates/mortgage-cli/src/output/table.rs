use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_scalar, ordered_headers, schedule_rows};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    print!("{}", render_table(value));
}

/// Summary table, then the schedule table when rows are present, then
/// warnings and methodology from the envelope.
pub fn render_table(value: &Value) -> String {
    let mut out = String::new();

    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                render_result(&mut out, result, map);
            } else {
                out.push_str(&field_table(map));
                out.push('\n');
            }
        }
        Value::Array(arr) => {
            out.push_str(&rows_table(arr));
            out.push('\n');
        }
        _ => {
            out.push_str(&format!("{}\n", value));
        }
    }

    out
}

fn render_result(out: &mut String, result: &Value, envelope: &Map<String, Value>) {
    let summary = result
        .get("summary")
        .and_then(Value::as_object)
        .or_else(|| result.as_object());

    if let Some(summary) = summary {
        out.push_str(&field_table(summary));
        out.push('\n');
    }

    if let Some(rows) = schedule_rows(result) {
        out.push('\n');
        out.push_str(&rows_table(rows));
        out.push('\n');
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\nWarnings:\n");
            for w in warnings {
                if let Value::String(s) = w {
                    out.push_str(&format!("  - {}\n", s));
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        out.push_str(&format!("\nMethodology: {}\n", meth));
    }
}

fn field_table(map: &Map<String, Value>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if val.is_array() || val.is_object() {
            continue;
        }
        builder.push_record([key.clone(), format_scalar(val)]);
    }
    Table::from(builder).to_string()
}

fn rows_table(rows: &[Value]) -> String {
    let Some(Value::Object(first)) = rows.first() else {
        if rows.is_empty() {
            return "(empty)".to_string();
        }
        return rows
            .iter()
            .map(format_scalar)
            .collect::<Vec<_>>()
            .join("\n");
    };

    let headers = ordered_headers(first);
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h).map(format_scalar).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    Table::from(builder).to_string()
}
