//! Helpers for reading loosely-shaped JSON data

use serde_json::{Map, Value};

/// Resolve a dotted path (e.g. `deductibles.individual`) against data
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not an object. An empty path resolves to `data` itself.
pub fn resolve_path<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(data);
    }

    let mut current = data;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// The value as a mapping, if it is a non-empty object
pub fn non_empty_object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object().filter(|map| !map.is_empty())
}

/// Convert a JSON value to string for rendering
///
/// Values are passed through verbatim: no number formatting, rounding or
/// locale handling is applied.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_simple_field() {
        let data = json!({ "planInfo": { "carrier": "Aetna" } });
        let result = resolve_path("planInfo", &data);
        assert_eq!(result, Some(&json!({ "carrier": "Aetna" })));
    }

    #[test]
    fn test_resolve_nested_field() {
        let data = json!({
            "deductibles": {
                "individual": { "inNetwork": 500 }
            }
        });
        let result = resolve_path("deductibles.individual.inNetwork", &data);
        assert_eq!(result, Some(&json!(500)));
    }

    #[test]
    fn test_resolve_empty_path() {
        let data = json!({ "a": 1 });
        assert_eq!(resolve_path("", &data), Some(&data));
    }

    #[test]
    fn test_resolve_missing_field() {
        let data = json!({ "name": "John" });
        assert_eq!(resolve_path("missing", &data), None);
    }

    #[test]
    fn test_resolve_through_scalar() {
        let data = json!({ "deductibles": "n/a" });
        assert_eq!(resolve_path("deductibles.individual", &data), None);
    }

    #[test]
    fn test_non_empty_object() {
        assert!(non_empty_object(&json!({ "a": 1 })).is_some());
        assert!(non_empty_object(&json!({})).is_none());
        assert!(non_empty_object(&json!([1])).is_none());
        assert!(non_empty_object(&json!(null)).is_none());
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("hello")), "hello");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(1500.5)), "1500.5");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(null)), "");
    }

    #[test]
    fn test_value_to_string_nested() {
        assert_eq!(value_to_string(&json!({ "a": 1 })), r#"{"a":1}"#);
        assert_eq!(value_to_string(&json!([1, 2])), "[1,2]");
    }
}
