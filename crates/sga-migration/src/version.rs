//! Reading the schema version a record was written under.

use serde_json::Value;

use sga_core::constants::SCHEMA_VERSION_FIELD;
use sga_core::models::{Coercion, ValueShape};

use crate::coerce::integral_u64;
use crate::Record;

/// Version stamped on `record`, with a coercion when the stamp was malformed.
///
/// Absent or `null` means a legacy record (version 0). Integral floats and
/// decimal text are accepted; anything else is treated as version 0.
/// Whole numbers beyond `u32` are kept wide so newer records are never
/// mistaken for legacy ones; digit text beyond `u64` reads as `u64::MAX`.
pub fn read_version(record: &Record) -> (u64, Option<Coercion>) {
    let Some(raw) = record.get(SCHEMA_VERSION_FIELD) else {
        return (0, None);
    };

    let parsed = match raw {
        Value::Null => return (0, None),
        Value::Number(n) => match n.as_u64() {
            Some(v) => return (v, None),
            None => n.as_f64().and_then(integral_u64),
        },
        Value::String(text) => parse_version_text(text.trim()),
        _ => None,
    };

    let version = parsed.unwrap_or(0);
    let coercion = Coercion::new(
        SCHEMA_VERSION_FIELD,
        ValueShape::Number,
        ValueShape::of(raw),
        version.to_string(),
    );
    (version, Some(coercion))
}

fn parse_version_text(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<u64>().unwrap_or(u64::MAX))
}
