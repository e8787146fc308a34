//! # sga-core
//!
//! Foundation crate for SGA QA record migration.
//! Defines record kinds, coercion and summary models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::SgaConfig;
pub use errors::{SgaError, SgaResult};
pub use models::{Coercion, MigrationSummary, RecordKind, ValueShape};
