use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::LATEST_SCHEMA_VERSION;
use crate::errors::ConfigError;

/// Schema migration configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Version records are brought up to. Must lie in `1..=LATEST_SCHEMA_VERSION`.
    pub target_version: u32,
    /// Whether coercions are collected into each migration summary.
    /// Coercions are logged either way.
    pub record_coercions: bool,
}

impl MigrationConfig {
    /// Config targeting an explicit version, with the remaining fields defaulted.
    pub fn targeting(target_version: u32) -> Self {
        Self {
            target_version,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_version == 0 || self.target_version > LATEST_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedTargetVersion {
                requested: self.target_version,
                latest: LATEST_SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    /// True when records are brought all the way to the newest known shape.
    pub fn targets_latest(&self) -> bool {
        self.target_version == LATEST_SCHEMA_VERSION
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            target_version: defaults::DEFAULT_TARGET_VERSION,
            record_coercions: defaults::DEFAULT_RECORD_COERCIONS,
        }
    }
}
