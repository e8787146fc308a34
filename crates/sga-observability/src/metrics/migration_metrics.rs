//! Aggregate counters over a batch of migrated records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sga_core::models::MigrationSummary;

/// Counts collected while migrating a batch (e.g. every job in a listing).
///
/// Coercion counters read `summary.coercions`, so summaries folded in here
/// must carry their full coercion list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationMetrics {
    pub target_version: u32,
    pub records_seen: usize,
    /// Records that had at least one step applied.
    pub records_upgraded: usize,
    /// Records already at the target with nothing coerced.
    pub records_current: usize,
    /// Records written by a newer release and passed through.
    pub records_ahead: usize,
    /// Records with at least one coercion.
    pub records_coerced: usize,
    /// Coercion count per field path.
    pub coercions_by_field: BTreeMap<String, usize>,
}

impl MigrationMetrics {
    pub fn new(target_version: u32) -> Self {
        Self {
            target_version,
            ..Self::default()
        }
    }

    /// Fold one record's summary into the counters.
    pub fn record(&mut self, summary: &MigrationSummary) {
        self.records_seen += 1;

        if summary.from_version > self.target_version {
            self.records_ahead += 1;
        } else if !summary.steps_applied.is_empty() {
            self.records_upgraded += 1;
        } else if summary.coercions.is_empty() {
            self.records_current += 1;
        }

        if summary.was_coerced() {
            self.records_coerced += 1;
            for coercion in &summary.coercions {
                *self
                    .coercions_by_field
                    .entry(coercion.field.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    pub fn total_coercions(&self) -> usize {
        self.coercions_by_field.values().sum()
    }

    /// Field with the most coercions, ties broken by path order.
    pub fn most_coerced_field(&self) -> Option<(&str, usize)> {
        self.coercions_by_field
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(field, count)| (field.as_str(), *count))
    }
}
