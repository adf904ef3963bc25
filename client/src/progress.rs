//! Detection of not-yet-final result documents.

use serde_json::Value;

/// Sentinel the backend puts anywhere in a document that is still being
/// computed.
pub const IN_PROGRESS: &str = "in_progress";

/// `true` if `value` is the string `"in_progress"` or contains it as an
/// object value or array element at any depth. Object keys are not checked.
pub fn contains_in_progress(value: &Value) -> bool {
    match value {
        Value::String(s) => s == IN_PROGRESS,
        Value::Object(map) => map.values().any(contains_in_progress),
        Value::Array(items) => items.iter().any(contains_in_progress),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}
