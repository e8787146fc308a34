//! Shape coercions shared by every migration chain.
//!
//! Each helper leaves a well-formed field untouched, fills a missing one
//! with its default, and replaces a malformed one with the nearest safe
//! value while recording a [`Coercion`].

use serde_json::{Map, Value};

use sga_core::models::{Coercion, RecordKind, ValueShape};
use sga_observability::tracing_setup::events;

use crate::Record;

/// Coercions collected while migrating one record.
#[derive(Debug)]
pub struct CoercionLog {
    kind: RecordKind,
    entries: Vec<Coercion>,
}

impl CoercionLog {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Record a coercion and emit it as a warning.
    pub fn push(&mut self, coercion: Coercion) {
        events::coercion_applied(self.kind, &coercion);
        self.entries.push(coercion);
    }

    /// Adopt coercions from an embedded record, already logged by its own migration.
    pub fn absorb_nested(&mut self, parent: &str, coercions: Vec<Coercion>) {
        self.entries
            .extend(coercions.into_iter().map(|c| c.nested_under(parent)));
    }

    pub fn entries(&self) -> &[Coercion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Coercion> {
        self.entries
    }
}

/// Join a parent path and a key into a dotted field path.
pub fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Parse text that looks like a JSON object or array.
///
/// Hash-backed storage keeps nested values as JSON text; anything that is not
/// bracketed or fails to parse yields `None`.
pub fn decode_json_text(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !bracketed {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Ensure `record[key]` is an array. Missing or `null` becomes `[]`.
pub fn ensure_array(record: &mut Record, key: &str, path: &str, log: &mut CoercionLog) {
    let slot = record.entry(key).or_insert(Value::Null);
    let replacement = match slot {
        Value::Array(_) => return,
        Value::Null => {
            *slot = Value::Array(Vec::new());
            return;
        }
        Value::String(text) => match decode_json_text(text) {
            Some(decoded @ Value::Array(_)) => (decoded, "decoded"),
            _ => (Value::Array(Vec::new()), "[]"),
        },
        _ => (Value::Array(Vec::new()), "[]"),
    };
    let found = ValueShape::of(slot);
    *slot = replacement.0;
    log.push(Coercion::new(path, ValueShape::Array, found, replacement.1));
}

/// Ensure `record[key]` is an object or `null`. Missing becomes `null`.
pub fn ensure_object_or_null(record: &mut Record, key: &str, path: &str, log: &mut CoercionLog) {
    let slot = record.entry(key).or_insert(Value::Null);
    coerce_object_or_null(slot, path, log);
}

/// Same as [`ensure_object_or_null`], but leaves an absent key absent.
pub fn coerce_present_object_or_null(
    record: &mut Record,
    key: &str,
    path: &str,
    log: &mut CoercionLog,
) {
    if let Some(slot) = record.get_mut(key) {
        coerce_object_or_null(slot, path, log);
    }
}

fn coerce_object_or_null(slot: &mut Value, path: &str, log: &mut CoercionLog) {
    let replacement = match slot {
        Value::Object(_) | Value::Null => return,
        Value::String(text) => match decode_json_text(text) {
            Some(decoded @ Value::Object(_)) => (decoded, "decoded"),
            _ => (Value::Null, "null"),
        },
        _ => (Value::Null, "null"),
    };
    let found = ValueShape::of(slot);
    *slot = replacement.0;
    log.push(Coercion::new(path, ValueShape::Object, found, replacement.1));
}

/// Ensure a present, non-null `record[key]` is an object; anything else
/// becomes `{}`. Returns the object for further fixing, or `None` when the
/// key is absent or `null`.
pub fn coerce_section<'a>(
    record: &'a mut Record,
    key: &str,
    path: &str,
    log: &mut CoercionLog,
) -> Option<&'a mut Map<String, Value>> {
    let slot = record.get_mut(key)?;
    let replacement = match slot {
        Value::Null => return None,
        Value::Object(_) => None,
        Value::String(text) => match decode_json_text(text) {
            Some(decoded @ Value::Object(_)) => Some((decoded, "decoded")),
            _ => Some((Value::Object(Map::new()), "{}")),
        },
        _ => Some((Value::Object(Map::new()), "{}")),
    };
    if let Some((value, fallback)) = replacement {
        let found = ValueShape::of(slot);
        *slot = value;
        log.push(Coercion::new(path, ValueShape::Object, found, fallback));
    }
    slot.as_object_mut()
}

/// Keep a present `record[key]` string-shaped. Numbers and booleans are
/// stringified; arrays and objects become `""`. Absent or `null` is left alone.
pub fn coerce_present_string(record: &mut Record, key: &str, path: &str, log: &mut CoercionLog) {
    let Some(slot) = record.get_mut(key) else {
        return;
    };
    let replacement = match slot {
        Value::String(_) | Value::Null => return,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    };
    let found = ValueShape::of(slot);
    let fallback = Value::String(replacement.clone()).to_string();
    *slot = Value::String(replacement);
    log.push(Coercion::new(path, ValueShape::String, found, fallback));
}

/// Ensure `record[key]` is a boolean. Missing or `null` becomes `default`;
/// `"true"`/`"false"` text is decoded.
pub fn ensure_bool(
    record: &mut Record,
    key: &str,
    path: &str,
    default: bool,
    log: &mut CoercionLog,
) {
    let slot = record.entry(key).or_insert(Value::Null);
    let replacement = match slot {
        Value::Bool(_) => return,
        Value::Null => {
            *slot = Value::Bool(default);
            return;
        }
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    };
    let found = ValueShape::of(slot);
    *slot = Value::Bool(replacement);
    log.push(Coercion::new(path, ValueShape::Bool, found, replacement.to_string()));
}

/// Ensure `record[key]` is a non-negative integer. Missing or `null` becomes
/// `default`; integral floats and decimal text are converted.
pub fn ensure_count(
    record: &mut Record,
    key: &str,
    path: &str,
    default: u64,
    log: &mut CoercionLog,
) {
    let slot = record.entry(key).or_insert(Value::Null);
    let replacement = match slot {
        Value::Null => {
            *slot = Value::from(default);
            return;
        }
        Value::Number(n) if n.as_u64().is_some() => return,
        Value::Number(n) => n.as_f64().and_then(integral_u64).unwrap_or(default),
        Value::String(text) => text.trim().parse::<u64>().unwrap_or(default),
        _ => default,
    };
    let found = ValueShape::of(slot);
    *slot = Value::from(replacement);
    log.push(Coercion::new(path, ValueShape::Number, found, replacement.to_string()));
}

/// `Some(n)` when `value` is a non-negative whole number that fits in `u64`.
pub(crate) fn integral_u64(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}
