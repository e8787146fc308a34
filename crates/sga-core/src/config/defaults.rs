use crate::constants::LATEST_SCHEMA_VERSION;

// Migration
pub const DEFAULT_TARGET_VERSION: u32 = LATEST_SCHEMA_VERSION;
pub const DEFAULT_RECORD_COERCIONS: bool = true;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_LOG_TARGETS: bool = true;

/// Levels accepted by `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
