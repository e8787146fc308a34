//! Golden scenarios: stored records from every release and their migrated form.

use serde_json::Value;

use sga_core::models::RecordKind;
use sga_migration::SchemaMigrator;
use test_fixtures::legacy_fixtures;

#[test]
fn legacy_fixtures_are_present() {
    let fixtures = legacy_fixtures();
    assert!(fixtures.len() >= 8, "found {} fixtures", fixtures.len());
    for kind in RecordKind::ALL {
        assert!(
            fixtures
                .iter()
                .any(|(_, f)| f.kind.parse::<RecordKind>().unwrap() == kind),
            "no fixture for {kind}"
        );
    }
}

#[test]
fn every_fixture_migrates_to_its_expected_record() {
    let migrator = SchemaMigrator::latest();
    for (name, fixture) in legacy_fixtures() {
        let kind: RecordKind = fixture.kind.parse().unwrap();
        let outcome = migrator.migrate(fixture.stored.clone(), kind);

        assert_eq!(
            Value::Object(outcome.record.clone()),
            Value::Object(fixture.expected.clone()),
            "{name}: {}",
            fixture.description
        );

        let coerced: Vec<&str> = outcome
            .summary
            .coercions
            .iter()
            .map(|c| c.field.as_str())
            .collect();
        assert_eq!(coerced, fixture.expected_coercions, "{name}: coercions");
    }
}

#[test]
fn every_fixture_is_stable_under_remigration() {
    let migrator = SchemaMigrator::latest();
    for (name, fixture) in legacy_fixtures() {
        let kind: RecordKind = fixture.kind.parse().unwrap();
        let once = migrator.migrate(fixture.stored, kind);
        let twice = migrator.migrate(once.record.clone(), kind);
        assert_eq!(twice.record, once.record, "{name}");
        assert!(twice.summary.is_noop(), "{name}: {:?}", twice.summary);
    }
}

#[test]
fn expected_records_are_already_current() {
    let migrator = SchemaMigrator::latest();
    for (name, fixture) in legacy_fixtures() {
        let kind: RecordKind = fixture.kind.parse().unwrap();
        let outcome = migrator.migrate(fixture.expected.clone(), kind);
        assert_eq!(outcome.record, fixture.expected, "{name}");
        assert!(outcome.summary.steps_applied.is_empty(), "{name}");
    }
}
