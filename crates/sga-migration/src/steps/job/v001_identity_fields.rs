//! v001: string-shaped identity fields and date-only job dates.
//!
//! Early jobs stored `location` as `{ address }` and `jobNo` as a number,
//! and some wrote full ISO timestamps into `jobDate`/`dueDate`.

use serde_json::Value;

use sga_core::constants::INVALID_LOCATION_PLACEHOLDER;
use sga_core::models::{Coercion, ValueShape};

use crate::coerce::{coerce_present_string, CoercionLog};
use crate::dates::normalize_date_field;
use crate::Record;

pub fn migrate(record: &mut Record, log: &mut CoercionLog) {
    conform_identity(record, log);
    normalize_date_field(record, "jobDate");
    normalize_date_field(record, "dueDate");
}

pub(super) fn conform_identity(record: &mut Record, log: &mut CoercionLog) {
    coerce_present_string(record, "jobNo", "jobNo", log);
    normalize_location(record, log);
}

/// `location` must render as text: an address object collapses to its
/// address, anything unusable to a placeholder.
fn normalize_location(record: &mut Record, log: &mut CoercionLog) {
    let Some(slot) = record.get_mut("location") else {
        return;
    };
    let (text, coerced) = match slot {
        Value::String(_) | Value::Null => return,
        Value::Object(location) => match location.get("address") {
            Some(Value::String(address)) if !address.is_empty() => (address.clone(), false),
            _ => (INVALID_LOCATION_PLACEHOLDER.to_string(), true),
        },
        Value::Number(n) => (n.to_string(), true),
        Value::Bool(_) | Value::Array(_) => (INVALID_LOCATION_PLACEHOLDER.to_string(), true),
    };
    let found = ValueShape::of(slot);
    *slot = Value::String(text);
    if coerced {
        log.push(Coercion::new(
            "location",
            ValueShape::String,
            found,
            slot.to_string(),
        ));
    }
}
