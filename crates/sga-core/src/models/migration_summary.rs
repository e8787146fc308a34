use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Coercion, RecordKind};

/// What the migrator did to one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MigrationSummary {
    pub kind: RecordKind,
    /// Version read from the stored record (0 when absent, `u32::MAX` for wider stamps).
    pub from_version: u32,
    /// Version stamped on the returned record.
    pub to_version: u32,
    /// Names of the steps applied, in order, e.g. `job.v002_asphalt_details`.
    pub steps_applied: Vec<String>,
    /// Malformed fields that were coerced. Empty when collection is disabled.
    pub coercions: Vec<Coercion>,
}

impl MigrationSummary {
    pub fn new(kind: RecordKind, from_version: u32) -> Self {
        Self {
            kind,
            from_version,
            to_version: from_version,
            steps_applied: Vec::new(),
            coercions: Vec::new(),
        }
    }

    /// True when no step ran and nothing was coerced.
    pub fn is_noop(&self) -> bool {
        self.steps_applied.is_empty() && self.coercions.is_empty()
    }

    pub fn was_coerced(&self) -> bool {
        !self.coercions.is_empty()
    }
}
