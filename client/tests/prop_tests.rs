use proptest::prelude::*;
use serde_json::Value;

use bkyc_client::{contains_in_progress, IN_PROGRESS};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        prop_oneof![
            4 => "[a-z_]{0,12}",
            1 => Just(IN_PROGRESS.to_string()),
        ]
        .prop_map(Value::String),
    ];
    leaf.prop_recursive(5, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,12}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Independent check: walk the tree with an explicit stack and collect
/// every string leaf.
fn string_leaves(value: &Value) -> Vec<&str> {
    let mut out = Vec::new();
    let mut stack = vec![value];
    while let Some(v) = stack.pop() {
        match v {
            Value::String(s) => out.push(s.as_str()),
            Value::Array(items) => stack.extend(items.iter()),
            Value::Object(map) => stack.extend(map.values()),
            _ => {}
        }
    }
    out
}

proptest! {
    /// The detector agrees with a plain scan of all string leaves.
    #[test]
    fn detector_matches_leaf_scan(value in arb_json()) {
        let expected = string_leaves(&value).contains(&IN_PROGRESS);
        prop_assert_eq!(contains_in_progress(&value), expected);
    }

    /// Wrapping a document that contains the sentinel keeps it detected.
    #[test]
    fn sentinel_survives_wrapping(value in arb_json(), key in "[a-z]{1,8}") {
        let wrapped = serde_json::json!({ key: [value.clone(), IN_PROGRESS] });
        prop_assert!(contains_in_progress(&wrapped));
    }

    /// Keys never trigger the detector.
    #[test]
    fn keys_are_not_values(value in arb_json()) {
        let wrapped = serde_json::json!({ IN_PROGRESS: value.clone() });
        prop_assert_eq!(contains_in_progress(&wrapped), contains_in_progress(&value));
    }
}
