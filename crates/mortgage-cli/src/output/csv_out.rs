use serde_json::{Map, Value};
use std::io::{self, Write};

use super::{format_scalar, ordered_headers, schedule_rows};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

/// Schedule rows when the result carries them, otherwise field/value pairs.
pub fn write_csv<W: Write>(out: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let result = value.get("result").unwrap_or(value);
    if let Some(rows) = schedule_rows(result) {
        write_rows(&mut wtr, rows)?;
    } else if let Some(summary) = result.get("summary").and_then(Value::as_object) {
        write_fields(&mut wtr, summary)?;
    } else if let Value::Object(map) = result {
        write_fields(&mut wtr, map)?;
    } else if let Value::Array(arr) = result {
        write_rows(&mut wtr, arr)?;
    } else {
        wtr.write_record([format_scalar(result)])?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_fields<W: Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        if val.is_array() || val.is_object() {
            continue;
        }
        wtr.write_record([key.as_str(), &format_scalar(val)])?;
    }
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([format_scalar(item)])?;
        }
        return Ok(());
    };

    let headers = ordered_headers(first);
    wtr.write_record(&headers)?;
    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h).map(format_scalar).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}
