mod coercion;
mod migration_summary;
mod record_kind;
mod value_shape;

pub use coercion::Coercion;
pub use migration_summary::MigrationSummary;
pub use record_kind::RecordKind;
pub use value_shape::ValueShape;
