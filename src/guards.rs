//! Runtime type guards for untyped JSON values
//! Used to validate config files and API payloads before deserializing

use serde_json::Value;

/// True iff the value is a JSON string.
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// True iff the value is a JSON string or null.
pub fn is_string_or_null(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Null)
}

/// True iff the value is an array whose every element is a string.
///
/// Null (an absent list) is false; an empty array is true.
pub fn is_string_array(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(is_string),
        _ => false,
    }
}
