//! Rebuilding records from hash-style storage.
//!
//! Hash fields are flat strings, so nested objects and arrays are written
//! as JSON text. Rehydration parses those back and leaves every other value
//! alone.

use serde_json::Value;

use crate::Record;

/// Rebuild a record from the field/value pairs of a hash read.
///
/// String values that start with `{` and end with `}` (or `[` / `]`) are
/// parsed as JSON; if parsing fails the string is kept. Non-string values
/// are kept as-is.
pub fn hydrate_hash<I, K, V>(fields: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    fields
        .into_iter()
        .map(|(key, value)| (key.into(), hydrate_value(value.into())))
        .collect()
}

fn hydrate_value(value: Value) -> Value {
    match value {
        Value::String(text) if looks_like_json(&text) => {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        }
        other => other,
    }
}

fn looks_like_json(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'))
}
