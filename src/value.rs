//! Helpers for the loosely-typed values carried by forms and instances.

use serde_json::Value;

/// Returns whether a value counts as "set" for optional form attributes.
///
/// `null`, `false`, zero, the empty string and empty collections are unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Textual representation used for instance-provided defaults.
///
/// Strings render without quotes and `null` renders as the empty string;
/// everything else uses its JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reads a non-negative length out of a widget attribute.
///
/// Accepts integers and numeric strings (`maxlength="20"`).
pub fn as_length(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([0])));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Alice")), "Alice");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!(["a"])), "[\"a\"]");
    }

    #[test]
    fn test_as_length() {
        assert_eq!(as_length(&json!(20)), Some(20));
        assert_eq!(as_length(&json!("20")), Some(20));
        assert_eq!(as_length(&json!(" 5 ")), Some(5));
        assert_eq!(as_length(&json!(-1)), None);
        assert_eq!(as_length(&json!("many")), None);
        assert_eq!(as_length(&json!(null)), None);
    }
}
