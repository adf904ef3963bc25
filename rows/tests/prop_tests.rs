use proptest::prelude::*;
use serde_json::{Map, Value};

use bkyc_rows::{build_rows, flatten, DisplayRow};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z_]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-zA-Z_]{1,6}", arb_json(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

/// Rows a value contributes below its header: one per descendant node, or a
/// single row for a bare scalar.
fn expected_leaf_rows(value: &Value) -> usize {
    fn descendants(value: &Value) -> usize {
        match value {
            Value::Object(map) => map.values().map(|v| 1 + descendants(v)).sum(),
            Value::Array(items) => items.iter().map(|v| 1 + descendants(v)).sum(),
            _ => 0,
        }
    }
    match value {
        Value::Object(_) | Value::Array(_) => descendants(value),
        _ => 1,
    }
}

proptest! {
    /// Flattening the same document twice gives identical rows.
    #[test]
    fn build_rows_is_deterministic(doc in arb_document()) {
        prop_assert_eq!(build_rows(&doc), build_rows(&doc.clone()));
    }

    /// One header per top-level key, in ascending order.
    #[test]
    fn headers_are_sorted_top_level_keys(doc in arb_document()) {
        let titles: Vec<String> = build_rows(&doc)
            .into_iter()
            .filter_map(|row| match row {
                DisplayRow::Header { title } => Some(title),
                _ => None,
            })
            .collect();
        let mut keys: Vec<String> = doc.keys().cloned().collect();
        keys.sort();
        prop_assert_eq!(titles, keys);
    }

    /// Every node below a header yields exactly one row.
    #[test]
    fn row_count_matches_node_count(doc in arb_document()) {
        let expected: usize = doc.values().map(|v| 1 + expected_leaf_rows(v)).sum();
        prop_assert_eq!(build_rows(&doc).len(), expected);
    }

    /// Container rows carry no value; every other row does.
    #[test]
    fn only_container_rows_lack_values(value in arb_json()) {
        let containers = flatten(&value, "").iter().filter(|(_, v)| v.is_none()).count();
        let nested = match &value {
            Value::Object(map) => count_nested(map.values()),
            Value::Array(items) => count_nested(items.iter()),
            _ => 0,
        };
        prop_assert_eq!(containers, nested);
    }
}

fn count_nested<'a>(children: impl Iterator<Item = &'a Value>) -> usize {
    children
        .map(|child| match child {
            Value::Object(map) => 1 + count_nested(map.values()),
            Value::Array(items) => 1 + count_nested(items.iter()),
            _ => 0,
        })
        .sum()
}
