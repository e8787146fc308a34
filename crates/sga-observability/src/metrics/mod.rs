pub mod migration_metrics;

pub use migration_metrics::MigrationMetrics;
