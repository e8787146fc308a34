use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter level, overridden by `RUST_LOG` when set.
    pub log_level: String,
    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json_logs: bool,
    /// Include the event target (module path) in each line.
    pub log_targets: bool,
}

impl ObservabilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel {
                level: self.log_level.clone(),
            });
        }
        Ok(())
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            log_targets: defaults::DEFAULT_LOG_TARGETS,
        }
    }
}
