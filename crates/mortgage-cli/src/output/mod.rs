pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use mortgage_core::format::fixed2;
use serde_json::{Map, Value};

/// Column order for schedule rows; any other keys follow alphabetically.
const SCHEDULE_COLUMNS: [&str; 5] = [
    "payment_number",
    "payment_amount",
    "interest",
    "principal",
    "remaining_balance",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Headers for an array of row objects, schedule columns first.
pub(crate) fn ordered_headers(first: &Map<String, Value>) -> Vec<String> {
    let mut headers: Vec<String> = SCHEDULE_COLUMNS
        .iter()
        .filter(|c| first.contains_key(**c))
        .map(|c| c.to_string())
        .collect();
    for key in first.keys() {
        if !SCHEDULE_COLUMNS.contains(&key.as_str()) {
            headers.push(key.clone());
        }
    }
    headers
}

/// Scalar rendering shared by the text formatters; floats at 2 decimals.
pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n.as_f64().map(fixed2).unwrap_or_default(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// The `schedule` rows inside a `result` envelope, if any were produced.
pub(crate) fn schedule_rows(result: &Value) -> Option<&Vec<Value>> {
    result
        .get("schedule")
        .and_then(Value::as_array)
        .filter(|rows| !rows.is_empty())
}
