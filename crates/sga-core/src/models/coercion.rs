use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ValueShape;

/// A malformed field that was replaced or converted during migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coercion {
    /// Dotted path of the field, e.g. `sgaDailyReport.trucks` or `job.clientTier`.
    /// Empty when the record itself was not an object.
    pub field: String,
    /// Shape the latest schema requires.
    pub expected: ValueShape,
    /// Shape actually found in the stored record.
    pub found: ValueShape,
    /// What the field holds now, e.g. `null`, `[]`, `"Tier 3"`, `decoded`.
    pub fallback: String,
}

impl Coercion {
    pub fn new(
        field: impl Into<String>,
        expected: ValueShape,
        found: ValueShape,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected,
            found,
            fallback: fallback.into(),
        }
    }

    /// Same coercion, reported under a parent path (`job.` + field).
    pub fn nested_under(mut self, parent: &str) -> Self {
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }
}
