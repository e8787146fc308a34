//! v002: array fields inside each QA form section always exist.
//!
//! Front-end forms map over these lists, so a missing list breaks rendering.
//! Absent or `null` sections stay as they are.

use crate::coerce::{coerce_section, ensure_array, field_path, CoercionLog};
use crate::Record;

/// Form sections and the list fields each must carry.
const SECTION_ARRAYS: [(&str, &[&str]); 6] = [
    (
        "sgaDailyReport",
        &["weatherConditions", "correctorDetails", "trucks", "onSiteTests"],
    ),
    ("siteRecord", &["hazardLog", "siteVisitors"]),
    ("asphaltPlacement", &["placements"]),
    ("straightEdge", &["tests"]),
    ("itpChecklist", &["sections"]),
    ("sprayReport", &["runs"]),
];

pub fn migrate(record: &mut Record, log: &mut CoercionLog) {
    for (section, arrays) in SECTION_ARRAYS {
        let Some(fields) = coerce_section(record, section, section, log) else {
            continue;
        };
        for key in arrays {
            ensure_array(fields, key, &field_path(section, key), log);
        }
    }
}
