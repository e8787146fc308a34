//! Migration steps, grouped by record kind.
//!
//! Step modules are named after the version they produce: `v002_*` takes a
//! version 1 record to version 2.

pub mod job;
pub mod jobsheet;
pub mod report;

use serde_json::Value;

use sga_core::models::RecordKind;

use crate::coerce::{coerce_present_object_or_null, CoercionLog};
use crate::migrator::SchemaMigrator;
use crate::Record;

/// Migrate a record embedded under `key` through its own chain.
///
/// An absent or `null` embed is left alone. Coercions found inside it are
/// reported under `key.`.
pub(crate) fn migrate_embedded(
    record: &mut Record,
    key: &str,
    kind: RecordKind,
    migrator: &SchemaMigrator,
    log: &mut CoercionLog,
) {
    coerce_present_object_or_null(record, key, key, log);
    if let Some(Value::Object(embedded)) = record.get_mut(key) {
        let outcome = migrator.migrate(std::mem::take(embedded), kind);
        *embedded = outcome.record;
        log.absorb_nested(key, outcome.summary.coercions);
    }
}
