//! Test fixture loader for stored-record migration scenarios.
//!
//! Fixtures live in `crates/test-fixtures/legacy/*.json`. Each one holds a
//! record as it sits in storage and the record the migrator must return.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    // From a sibling crate (e.g. sga-migration), go up to `crates/`.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// A stored record and the record expected after migration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationFixture {
    /// Record kind name, as accepted by `RecordKind::from_str`.
    pub kind: String,
    pub description: String,
    pub stored: Map<String, Value>,
    pub expected: Map<String, Value>,
    /// Coerced field paths, in the order the migrator reports them.
    #[serde(default)]
    pub expected_coercions: Vec<String>,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a migration scenario.
pub fn load_migration_fixture(relative_path: &str) -> MigrationFixture {
    load_fixture(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Every migration scenario under `legacy/`, with its file name.
pub fn legacy_fixtures() -> Vec<(String, MigrationFixture)> {
    list_fixtures("legacy")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let fixture = load_migration_fixture(&format!("legacy/{name}"));
            (name, fixture)
        })
        .collect()
}
