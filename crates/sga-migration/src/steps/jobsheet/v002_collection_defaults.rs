//! v002: list fields always present as arrays, boolean `dayShift`.
//!
//! Sheets rebuilt from hash storage may carry lists as JSON text and
//! booleans as `"true"`/`"false"`.

use crate::coerce::{coerce_present_string, ensure_array, ensure_bool, CoercionLog};
use crate::dates::normalize_date_field;
use crate::Record;

/// List fields every sheet carries, default `[]`.
const ARRAY_FIELDS: [&str; 4] = ["jobMaterials", "jobDetails", "equipment", "jobSheetImages"];

pub fn migrate(record: &mut Record, log: &mut CoercionLog) {
    conform_collections(record, log);
    normalize_date_field(record, "date");
}

pub(super) fn conform_collections(record: &mut Record, log: &mut CoercionLog) {
    for key in ARRAY_FIELDS {
        ensure_array(record, key, key, log);
    }
    ensure_bool(record, "dayShift", "dayShift", false, log);
    coerce_present_string(record, "jobNo", "jobNo", log);
}
