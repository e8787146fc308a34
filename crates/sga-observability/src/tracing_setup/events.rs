//! Structured events emitted by the migrator.

use sga_core::models::{Coercion, MigrationSummary, RecordKind};
use tracing::{debug, info, warn};

/// A single migration step ran.
pub fn step_applied(kind: RecordKind, step: &str, from_version: u32) {
    debug!(kind = %kind, step, from_version, "migration step applied");
}

/// A malformed field was replaced with a safe default.
pub fn coercion_applied(kind: RecordKind, coercion: &Coercion) {
    warn!(
        kind = %kind,
        field = %coercion.field,
        expected = %coercion.expected,
        found = %coercion.found,
        fallback = %coercion.fallback,
        "coerced malformed field"
    );
}

/// A record finished migrating. Silent for records that were already current.
pub fn record_migrated(summary: &MigrationSummary, coercion_count: usize) {
    if summary.steps_applied.is_empty() && coercion_count == 0 {
        return;
    }
    info!(
        kind = %summary.kind,
        from_version = summary.from_version,
        to_version = summary.to_version,
        steps = summary.steps_applied.len(),
        coercions = coercion_count,
        "record migrated"
    );
}

/// A record was written by a newer release; it is passed through untouched.
pub fn future_version_skipped(kind: RecordKind, version: u64, target_version: u32) {
    warn!(
        kind = %kind,
        version,
        target_version,
        "record is newer than the migrator target, passing through"
    );
}
