//! The schema migrator: version detection, step walking, conformance, stamping.

use serde_json::Value;

use sga_core::config::{MigrationConfig, SgaConfig};
use sga_core::constants::SCHEMA_VERSION_FIELD;
use sga_core::errors::{SgaError, SgaResult};
use sga_core::models::{Coercion, MigrationSummary, RecordKind, ValueShape};
use sga_observability::tracing_setup::events;
use sga_observability::{migration_batch_span, migration_span, MigrationMetrics};

use crate::chain::chain_for;
use crate::coerce::CoercionLog;
use crate::hydrate::hydrate_hash;
use crate::version::read_version;
use crate::Record;

/// A migrated record and what was done to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationOutcome {
    pub record: Record,
    pub summary: MigrationSummary,
}

/// Records from one batch read, plus counters over the batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub records: Vec<Record>,
    pub metrics: MigrationMetrics,
}

/// Brings stored records up to the configured schema version.
///
/// Pure and infallible: malformed fields are coerced, never raised.
/// Holds only its config, so it is cheap to copy and share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaMigrator {
    config: MigrationConfig,
}

impl SchemaMigrator {
    /// Create a migrator, rejecting targets outside the known chains.
    pub fn new(config: MigrationConfig) -> SgaResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Migrator targeting the newest schema with default settings.
    pub fn latest() -> Self {
        Self {
            config: MigrationConfig::default(),
        }
    }

    pub fn from_config(config: &SgaConfig) -> SgaResult<Self> {
        Self::new(config.migration)
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    pub fn target_version(&self) -> u32 {
        self.config.target_version
    }

    /// Migrate one record of the given kind.
    ///
    /// Records stamped with a version above the target come from a newer
    /// release and are returned untouched.
    pub fn migrate(&self, record: Record, kind: RecordKind) -> MigrationOutcome {
        self.migrate_logged(record, kind, CoercionLog::new(kind))
    }

    /// Migrate any JSON value. A non-object value is replaced by an empty
    /// record, reported as a coercion of the whole record.
    pub fn migrate_value(&self, value: Value, kind: RecordKind) -> MigrationOutcome {
        let mut log = CoercionLog::new(kind);
        let record = match value {
            Value::Object(record) => record,
            other => {
                log.push(Coercion::new(
                    "",
                    ValueShape::Object,
                    ValueShape::of(&other),
                    "{}",
                ));
                Record::new()
            }
        };
        self.migrate_logged(record, kind, log)
    }

    /// Parse JSON text and migrate it. Unparseable text is a read failure and
    /// is returned as [`SgaError::MalformedJson`].
    pub fn migrate_json(&self, json: &str, kind: RecordKind) -> SgaResult<MigrationOutcome> {
        let value: Value = serde_json::from_str(json).map_err(|e| SgaError::MalformedJson {
            reason: e.to_string(),
        })?;
        Ok(self.migrate_value(value, kind))
    }

    /// Rehydrate a hash read and migrate the result.
    pub fn migrate_hash<I, K, V>(&self, fields: I, kind: RecordKind) -> MigrationOutcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.migrate(hydrate_hash(fields), kind)
    }

    /// Migrate every record of a listing, collecting batch counters.
    ///
    /// Counters see every coercion; `record_coercions` only governs
    /// per-record summaries, which a batch does not return.
    pub fn migrate_batch<I>(&self, records: I, kind: RecordKind) -> BatchOutcome
    where
        I: IntoIterator<Item = Record>,
    {
        let span = migration_batch_span!(kind, self.config.target_version);
        let _guard = span.enter();

        let counting = Self {
            config: MigrationConfig {
                record_coercions: true,
                ..self.config
            },
        };
        let mut metrics = MigrationMetrics::new(self.config.target_version);
        let records = records
            .into_iter()
            .map(|record| {
                let outcome = counting.migrate(record, kind);
                metrics.record(&outcome.summary);
                outcome.record
            })
            .collect();

        BatchOutcome { records, metrics }
    }

    /// Stamp a freshly written record with the target version.
    pub fn stamp(&self, record: &mut Record) {
        record.insert(
            SCHEMA_VERSION_FIELD.to_string(),
            Value::from(self.config.target_version),
        );
    }

    fn migrate_logged(
        &self,
        mut record: Record,
        kind: RecordKind,
        mut log: CoercionLog,
    ) -> MigrationOutcome {
        let target = self.config.target_version;
        let (stored_version, version_coercion) = read_version(&record);
        // Summaries carry `u32`; wider stamps only occur on pass-through records.
        let from_version = u32::try_from(stored_version).unwrap_or(u32::MAX);
        let mut summary = MigrationSummary::new(kind, from_version);

        let span = migration_span!(kind, stored_version, target);
        let _guard = span.enter();

        if stored_version > u64::from(target) {
            events::future_version_skipped(kind, stored_version, target);
            return MigrationOutcome { record, summary };
        }
        if let Some(coercion) = version_coercion {
            log.push(coercion);
        }

        let chain = chain_for(kind);
        for step in chain.steps_between(from_version, target) {
            (step.apply)(&mut record, &mut log);
            events::step_applied(kind, step.name, step.from_version);
            summary.steps_applied.push(format!("{kind}.{}", step.name));
        }
        if target == chain.latest_version() {
            (chain.conform)(&mut record, &mut log, self);
        }

        self.stamp(&mut record);
        summary.to_version = target;

        let coercion_count = log.len();
        if self.config.record_coercions {
            summary.coercions = log.into_entries();
        }
        events::record_migrated(&summary, coercion_count);

        MigrationOutcome { record, summary }
    }
}

impl Default for SchemaMigrator {
    fn default() -> Self {
        Self::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sga_core::constants::LATEST_SCHEMA_VERSION;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn legacy_job_reaches_latest() {
        let outcome = SchemaMigrator::latest()
            .migrate(record(json!({"jobNo": "123", "client": "Acme"})), RecordKind::Job);
        assert_eq!(
            Value::Object(outcome.record),
            json!({
                "jobNo": "123",
                "client": "Acme",
                "clientTier": "Tier 3",
                "asphaltDetails": null,
                "schemaVersion": 2
            })
        );
        assert_eq!(outcome.summary.from_version, 0);
        assert_eq!(outcome.summary.to_version, LATEST_SCHEMA_VERSION);
        assert_eq!(
            outcome.summary.steps_applied,
            vec!["job.v001_identity_fields", "job.v002_asphalt_details"]
        );
        assert!(outcome.summary.coercions.is_empty());
    }

    #[test]
    fn partial_target_stops_early_and_skips_conformance() {
        let migrator = SchemaMigrator::new(MigrationConfig::targeting(1)).unwrap();
        let outcome = migrator.migrate(record(json!({"jobNo": 7})), RecordKind::Job);
        assert_eq!(
            Value::Object(outcome.record),
            json!({"jobNo": "7", "schemaVersion": 1})
        );
        assert_eq!(outcome.summary.steps_applied, vec!["job.v001_identity_fields"]);
    }

    #[test]
    fn new_rejects_unknown_target() {
        assert!(SchemaMigrator::new(MigrationConfig::targeting(0)).is_err());
        assert!(
            SchemaMigrator::new(MigrationConfig::targeting(LATEST_SCHEMA_VERSION + 1)).is_err()
        );
    }

    #[test]
    fn future_records_pass_through_untouched() {
        let stored = record(json!({"schemaVersion": 9, "clientTier": 42, "shape": "new"}));
        let outcome = SchemaMigrator::latest().migrate(stored.clone(), RecordKind::Job);
        assert_eq!(outcome.record, stored);
        assert_eq!(outcome.summary.from_version, 9);
        assert_eq!(outcome.summary.to_version, 9);
        assert!(outcome.summary.is_noop());
    }

    #[test]
    fn versions_beyond_u32_pass_through_untouched() {
        for stamp in [json!(4_294_967_296u64), json!("4294967296"), json!(u64::MAX)] {
            let stored = record(json!({"jobNo": "1", "schemaVersion": stamp, "shape": "new"}));
            let outcome = SchemaMigrator::latest().migrate(stored.clone(), RecordKind::Job);
            assert_eq!(outcome.record, stored);
            assert_eq!(outcome.summary.from_version, u32::MAX);
            assert!(outcome.summary.is_noop());
        }
    }

    #[test]
    fn coercions_can_be_left_out_of_the_summary() {
        let migrator = SchemaMigrator::new(MigrationConfig {
            record_coercions: false,
            ..MigrationConfig::default()
        })
        .unwrap();
        let outcome = migrator.migrate(
            record(json!({"asphaltDetails": "not-an-object"})),
            RecordKind::Job,
        );
        assert_eq!(outcome.record["asphaltDetails"], Value::Null);
        assert!(outcome.summary.coercions.is_empty());
    }

    #[test]
    fn batch_counts_coercions_even_when_summaries_omit_them() {
        let migrator = SchemaMigrator::new(MigrationConfig {
            record_coercions: false,
            ..MigrationConfig::default()
        })
        .unwrap();
        let current = record(json!({
            "schemaVersion": 2,
            "clientTier": "Tier 1",
            "asphaltDetails": "not-an-object"
        }));
        let batch = migrator.migrate_batch(vec![current], RecordKind::Job);

        assert_eq!(batch.records[0]["asphaltDetails"], Value::Null);
        assert_eq!(batch.metrics.records_current, 0);
        assert_eq!(batch.metrics.records_coerced, 1);
        assert_eq!(batch.metrics.coercions_by_field["asphaltDetails"], 1);
    }

    #[test]
    fn malformed_version_stamp_is_reported() {
        let outcome = SchemaMigrator::latest()
            .migrate(record(json!({"schemaVersion": "1"})), RecordKind::JobSheet);
        assert_eq!(outcome.summary.from_version, 1);
        assert_eq!(outcome.record["schemaVersion"], json!(2));
        assert_eq!(outcome.summary.coercions[0].field, "schemaVersion");
    }

    #[test]
    fn non_object_values_become_empty_records() {
        let outcome = SchemaMigrator::latest().migrate_value(json!([1, 2]), RecordKind::JobSheet);
        assert_eq!(outcome.record["schemaVersion"], json!(2));
        assert_eq!(outcome.record["jobDetails"], json!([]));
        let first = &outcome.summary.coercions[0];
        assert_eq!(first.field, "");
        assert_eq!(first.found, ValueShape::Array);
    }

    #[test]
    fn migrate_json_reports_parse_failures() {
        let err = SchemaMigrator::latest()
            .migrate_json("{\"jobNo\":", RecordKind::Job)
            .unwrap_err();
        assert!(matches!(err, SgaError::MalformedJson { .. }));
    }

    #[test]
    fn stamp_uses_target_version() {
        let mut fresh = record(json!({"jobNo": "J-9"}));
        SchemaMigrator::latest().stamp(&mut fresh);
        assert_eq!(fresh["schemaVersion"], json!(LATEST_SCHEMA_VERSION));
    }
}
