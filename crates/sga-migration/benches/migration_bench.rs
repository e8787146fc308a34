use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use sga_core::models::RecordKind;
use sga_migration::{Record, SchemaMigrator};

fn record(value: Value) -> Record {
    value.as_object().cloned().unwrap_or_default()
}

fn legacy_report() -> Record {
    record(json!({
        "submittedBy": "A. Foreman",
        "version": "2",
        "sgaDailyReport": {"completedBy": "A. Foreman", "trucks": "[{\"rego\":\"1ABC\"}]"},
        "siteRecord": {"hazardLog": []},
        "asphaltPlacement": {"placements": [{"lotNo": "A1", "tonnes": 32.5}]},
        "straightEdge": "{\"lotNo\":\"L-3\"}",
        "job": {
            "jobNo": 24017,
            "client": "Main Roads WA",
            "location": {"address": "Midvale"},
            "asphaltPlant": "Kewdale",
            "jobSheetData": {"dayShift": "true", "jobDetails": "[\"Mill 40mm\"]"}
        }
    }))
}

fn bench_migration(c: &mut Criterion) {
    let migrator = SchemaMigrator::latest();

    let legacy_job = record(json!({"jobNo": "123", "client": "Acme"}));
    c.bench_function("migrate_legacy_job", |b| {
        b.iter(|| migrator.migrate(black_box(legacy_job.clone()), RecordKind::Job))
    });

    let report = legacy_report();
    c.bench_function("migrate_legacy_report", |b| {
        b.iter(|| migrator.migrate(black_box(report.clone()), RecordKind::Report))
    });

    let current = migrator.migrate(legacy_report(), RecordKind::Report).record;
    c.bench_function("migrate_current_report", |b| {
        b.iter(|| migrator.migrate(black_box(current.clone()), RecordKind::Report))
    });

    let listing: Vec<Record> = (0..100)
        .map(|i| record(json!({"jobNo": i, "asphaltPlant": "Kewdale"})))
        .collect();
    c.bench_function("migrate_batch_100_jobs", |b| {
        b.iter(|| migrator.migrate_batch(black_box(listing.clone()), RecordKind::Job))
    });
}

criterion_group!(benches, bench_migration);
criterion_main!(benches);
