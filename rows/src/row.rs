//! Display row model.

use serde::Serialize;
use std::fmt;

/// One line of flattened presentation output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    /// Section header carrying a top-level key of the result document.
    Header { title: String },
    /// A leaf or nested-container line. `value` is `None` when the row
    /// introduces a nested object or array.
    KeyValue { key: String, value: Option<String> },
}

impl DisplayRow {
    pub fn header(title: impl Into<String>) -> Self {
        Self::Header {
            title: title.into(),
        }
    }

    pub fn key_value(key: impl Into<String>, value: Option<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

impl fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header { title } => write!(f, "[{}]", title),
            Self::KeyValue { key, value: None } => write!(f, "{}:", key),
            Self::KeyValue {
                key,
                value: Some(value),
            } => write!(f, "{}: {}", key, value),
        }
    }
}
