//! # sga-observability
//!
//! Tracing subscriber setup, span/event helpers for the migrator,
//! and aggregate metrics over batches of migrated records.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::MigrationMetrics;
pub use tracing_setup::init_tracing;
