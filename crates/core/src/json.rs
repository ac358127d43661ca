//! JSON key-path flattening
//!
//! Walks a parsed JSON document depth-first and emits one [`LeafEntry`] per
//! scalar. Object keys extend the path with `.key` (bare `key` at the root),
//! array elements with `[index]`. Containers never produce entries of their
//! own, so empty objects and arrays disappear from the output.

use serde::Serialize;
use serde_json::Value;

/// A scalar leaf and the path that reaches it
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LeafEntry {
    pub path: String,
    pub value: Value,
}

impl LeafEntry {
    /// Render as the `path: value` display line
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.path, format_leaf(&self.value))
    }
}

/// Flatten a JSON document into its leaves
///
/// Object keys come out in the map's iteration order, which for
/// `serde_json::Map` is ascending key order.
pub fn flatten(value: &Value) -> Vec<LeafEntry> {
    let mut leaves = Vec::new();
    flatten_into(value, String::new(), &mut leaves);
    leaves
}

fn flatten_into(value: &Value, path: String, leaves: &mut Vec<LeafEntry>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten_into(child, child_path, leaves);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, format!("{path}[{index}]"), leaves);
            }
        }
        scalar => leaves.push(LeafEntry {
            path,
            value: scalar.clone(),
        }),
    }
}

/// Render a leaf value for display
///
/// Strings are printed without quotes; every other scalar uses its JSON text.
pub fn format_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
