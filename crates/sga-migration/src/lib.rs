//! # sga-migration
//!
//! Brings persisted jobs, job sheets, and QA reports written by older
//! releases up to the current schema, on read.
//!
//! Each [`RecordKind`](sga_core::RecordKind) has an ordered chain of
//! migration steps, one per version transition. After the chain, records
//! bound for the newest version pass through a conformance pass that fills
//! required fields with their defaults. Malformed fields are coerced to safe
//! defaults and reported, never raised.

pub mod chain;
pub mod coerce;
pub mod hydrate;
pub mod migrator;
pub mod steps;
pub mod version;

mod dates;

pub use chain::{chain_for, MigrationChain, MigrationStep};
pub use coerce::CoercionLog;
pub use hydrate::hydrate_hash;
pub use migrator::{BatchOutcome, MigrationOutcome, SchemaMigrator};

/// A record as rehydrated from storage: string keys to JSON values.
pub type Record = serde_json::Map<String, serde_json::Value>;
