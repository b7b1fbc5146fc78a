use serde_json::Value;

use super::format_scalar;

/// Key answers in priority order.
const PRIORITY_KEYS: [&str; 3] = ["monthly_payment", "total_payback", "remaining_balance"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", render_minimal(value));
}

/// Looks for a priority field in `result.summary`, then in `result`, then
/// falls back to the first field of the result object.
pub fn render_minimal(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let candidates = [result_obj.get("summary"), Some(result_obj)];
    for map in candidates.into_iter().flatten().filter_map(Value::as_object) {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    return format_scalar(val);
                }
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result_obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefers_monthly_payment() {
        let v = json!({
            "result": {
                "summary": {"total_payback": 187793.04, "monthly_payment": 521.6473},
                "schedule": []
            }
        });
        assert_eq!(render_minimal(&v), "521.65");
    }

    #[test]
    fn test_falls_back_to_first_field() {
        let v = json!({"result": {"alpha": 3}});
        assert_eq!(render_minimal(&v), "alpha: 3");
    }

    #[test]
    fn test_scalar() {
        assert_eq!(render_minimal(&json!("done")), "done");
    }
}
