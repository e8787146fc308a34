//! Job sheet chain.

mod v001_placeholder;
mod v002_collection_defaults;

use crate::chain::MigrationStep;
use crate::coerce::CoercionLog;
use crate::migrator::SchemaMigrator;
use crate::Record;

pub const STEPS: &[MigrationStep] = &[
    MigrationStep {
        from_version: 0,
        name: "v001_placeholder",
        apply: v001_placeholder::migrate,
    },
    MigrationStep {
        from_version: 1,
        name: "v002_collection_defaults",
        apply: v002_collection_defaults::migrate,
    },
];

/// Newest job sheet shape: list fields are arrays, `dayShift` is a boolean,
/// `jobNo` is text when present.
pub fn conform(record: &mut Record, log: &mut CoercionLog, _migrator: &SchemaMigrator) {
    v002_collection_defaults::conform_collections(record, log);
}
