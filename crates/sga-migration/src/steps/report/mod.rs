//! QA report chain.

mod v001_photo_collections;
mod v002_section_arrays;

use sga_core::models::RecordKind;

use super::migrate_embedded;
use crate::chain::MigrationStep;
use crate::coerce::CoercionLog;
use crate::migrator::SchemaMigrator;
use crate::Record;

pub const STEPS: &[MigrationStep] = &[
    MigrationStep {
        from_version: 0,
        name: "v001_photo_collections",
        apply: v001_photo_collections::migrate,
    },
    MigrationStep {
        from_version: 1,
        name: "v002_section_arrays",
        apply: v002_section_arrays::migrate,
    },
];

/// Newest report shape: photo lists, a submission revision, array fields
/// inside every present form section, and current embedded job and sheet.
pub fn conform(record: &mut Record, log: &mut CoercionLog, migrator: &SchemaMigrator) {
    v001_photo_collections::migrate(record, log);
    v002_section_arrays::migrate(record, log);
    migrate_embedded(record, "job", RecordKind::Job, migrator, log);
    migrate_embedded(record, "jobSheet", RecordKind::JobSheet, migrator, log);
}
