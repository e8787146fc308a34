//! Span definitions for migration work.

/// Create a span covering the migration of one record.
#[macro_export]
macro_rules! migration_span {
    ($kind:expr, $from_version:expr, $target_version:expr) => {
        tracing::debug_span!(
            "sga.migration",
            kind = %$kind,
            from_version = $from_version,
            target_version = $target_version
        )
    };
}

/// Create a span covering a batch of records read together.
#[macro_export]
macro_rules! migration_batch_span {
    ($kind:expr, $target_version:expr) => {
        tracing::info_span!("sga.migration.batch", kind = %$kind, target_version = $target_version)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MIGRATION: &str = "sga.migration";
    pub const MIGRATION_BATCH: &str = "sga.migration.batch";
}
