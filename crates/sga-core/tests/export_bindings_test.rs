//! TypeScript bindings for the models the front end reads.
//!
//! Run with: cargo test -p sga-core export_bindings
//! Generated files appear in sga-core/bindings/*.ts

use sga_core::models::{Coercion, MigrationSummary, RecordKind, ValueShape};
use ts_rs::{Config, TS};

#[test]
fn export_bindings() {
    // `#[ts(export)]` on each model writes its .ts file during `cargo test`.
    let cfg = Config::default();

    assert_eq!(RecordKind::name(&cfg), "RecordKind");
    assert_eq!(ValueShape::name(&cfg), "ValueShape");
    assert_eq!(Coercion::name(&cfg), "Coercion");
    assert_eq!(MigrationSummary::name(&cfg), "MigrationSummary");
}

#[test]
fn record_kind_declares_serde_names() {
    let decl = RecordKind::decl(&Config::default());
    for kind in RecordKind::ALL {
        assert!(decl.contains(&format!("\"{kind}\"")), "{decl}");
    }
}

#[test]
fn summary_fields_use_camel_case() {
    let decl = MigrationSummary::decl(&Config::default());
    assert!(decl.starts_with("type MigrationSummary ="), "{decl}");
    assert!(decl.contains("fromVersion: number"), "{decl}");
    assert!(decl.contains("stepsApplied: Array<string>"), "{decl}");
    assert!(decl.contains("coercions: Array<Coercion>"), "{decl}");
}
