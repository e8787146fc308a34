//! Job chain.

mod v001_identity_fields;
mod v002_asphalt_details;

use sga_core::models::RecordKind;

use super::migrate_embedded;
use crate::chain::MigrationStep;
use crate::coerce::CoercionLog;
use crate::migrator::SchemaMigrator;
use crate::Record;

pub const STEPS: &[MigrationStep] = &[
    MigrationStep {
        from_version: 0,
        name: "v001_identity_fields",
        apply: v001_identity_fields::migrate,
    },
    MigrationStep {
        from_version: 1,
        name: "v002_asphalt_details",
        apply: v002_asphalt_details::migrate,
    },
];

/// Newest job shape: string `jobNo`/`location` when present, a valid
/// `clientTier`, `asphaltDetails` as object or `null`, and a current
/// embedded `jobSheetData`.
pub fn conform(record: &mut Record, log: &mut CoercionLog, migrator: &SchemaMigrator) {
    v001_identity_fields::conform_identity(record, log);
    v002_asphalt_details::conform_details(record, log);
    migrate_embedded(record, "jobSheetData", RecordKind::JobSheet, migrator, log);
}
