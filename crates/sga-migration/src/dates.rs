//! Date-only normalisation for legacy timestamp fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::Record;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rewrite a present `record[key]` holding a full timestamp as `YYYY-MM-DD`.
///
/// The date is taken in the timestamp's own offset. Values that are already
/// plain dates, or that do not parse, are left as they are.
pub(crate) fn normalize_date_field(record: &mut Record, key: &str) {
    let Some(Value::String(text)) = record.get_mut(key) else {
        return;
    };
    if let Some(date) = date_only(text) {
        *text = date;
    }
}

fn date_only(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if NaiveDate::parse_from_str(trimmed, DATE_FORMAT).is_ok() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.date_naive().format(DATE_FORMAT).to_string());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date().format(DATE_FORMAT).to_string())
}
