//! v001: photo lists and submission revision.

use sga_core::constants::DEFAULT_REPORT_REVISION;

use crate::coerce::{ensure_array, ensure_count, CoercionLog};
use crate::Record;

pub fn migrate(record: &mut Record, log: &mut CoercionLog) {
    ensure_array(record, "sitePhotos", "sitePhotos", log);
    ensure_array(record, "damagePhotos", "damagePhotos", log);
    ensure_count(record, "version", "version", DEFAULT_REPORT_REVISION, log);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use sga_core::models::RecordKind;

    #[test]
    fn legacy_report_gets_photo_lists_and_first_revision() {
        let mut record = json!({"submittedBy": "J. Smith"}).as_object().cloned().unwrap();
        let mut log = CoercionLog::new(RecordKind::Report);
        migrate(&mut record, &mut log);
        assert_eq!(
            Value::Object(record),
            json!({
                "submittedBy": "J. Smith",
                "sitePhotos": [],
                "damagePhotos": [],
                "version": 1
            })
        );
        assert!(log.is_empty());
    }

    #[test]
    fn revision_text_is_converted() {
        let mut record = json!({"version": "3"}).as_object().cloned().unwrap();
        let mut log = CoercionLog::new(RecordKind::Report);
        migrate(&mut record, &mut log);
        assert_eq!(record["version"], json!(3));
        assert_eq!(log.len(), 1);
    }
}
