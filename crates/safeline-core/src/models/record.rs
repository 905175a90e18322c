//! Schemaless table rows.
//!
//! A [`Record`] is whatever a page keeps in its table: a JSON object with no
//! shared schema. The filter engine only looks at fields by name.

use serde_json::{Map, Value};

/// One row of tabular data.
pub type Record = Map<String, Value>;

/// Nested `text` of a badge-shaped value (`{"text": "...", ...}`).
pub fn badge_text(value: &Value) -> Option<&str> {
    value.as_object()?.get("text")?.as_str()
}

/// Text form of a value used for matching and display.
///
/// Strings are taken as-is, badges contribute their nested text when
/// `unwrap_badge` is set, arrays join their elements with `,` and `null`
/// becomes the empty string.
pub fn value_text(value: &Value, unwrap_badge: bool) -> String {
    if unwrap_badge {
        if let Some(text) = badge_text(value) {
            return text.to_string();
        }
    }
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| value_text(item, unwrap_badge))
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// First of `keys` present on the record with a non-null value.
pub fn first_present<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}
