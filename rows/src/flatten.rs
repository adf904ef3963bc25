//! Recursive JSON-to-rows traversal.

use serde_json::{Map, Value};

use crate::DisplayRow;

/// Prefix added per nesting level below a top-level key.
pub const INDENT: &str = "  ";

/// Flatten a result document into display rows.
///
/// Emits a header for each top-level key (sorted), followed by the flattened
/// rows of its value with no indentation at the first level. An empty nested
/// container yields a header with no rows after it.
pub fn build_rows(document: &Map<String, Value>) -> Vec<DisplayRow> {
    let mut rows = Vec::new();

    for (key, value) in sorted_entries(document) {
        rows.push(DisplayRow::header(key.as_str()));
        rows.extend(
            flatten(value, "")
                .into_iter()
                .map(|(key, value)| DisplayRow::key_value(key, value)),
        );
    }

    rows
}

/// Flatten one value into `(display_key, value)` pairs.
///
/// Nested containers produce a `(key, None)` row followed by their own rows
/// with `indent + INDENT` as prefix. A bare scalar produces a single row with
/// an empty key.
pub fn flatten(value: &Value, indent: &str) -> Vec<(String, Option<String>)> {
    let mut out = Vec::new();
    flatten_into(value, indent, &mut out);
    out
}

fn flatten_into(value: &Value, indent: &str, out: &mut Vec<(String, Option<String>)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in sorted_entries(map) {
                push_child(format!("{indent}{key}"), child, indent, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                push_child(format!("{indent}[{index}]"), child, indent, out);
            }
        }
        scalar => out.push((String::new(), Some(format_scalar(scalar)))),
    }
}

fn push_child(
    display_key: String,
    child: &Value,
    indent: &str,
    out: &mut Vec<(String, Option<String>)>,
) {
    if is_container(child) {
        out.push((display_key, None));
        flatten_into(child, &format!("{indent}{INDENT}"), out);
    } else {
        out.push((display_key, Some(format_scalar(child))));
    }
}

/// `true` for objects and arrays.
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Render a scalar for display: `Null`, `true`/`false`, numbers in their
/// natural form and strings without quotes.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "Null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        container => container.to_string(),
    }
}

fn sorted_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
