pub mod defaults;
mod migration_config;
mod observability_config;

pub use migration_config::MigrationConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SgaResult};

/// Top-level configuration, loaded from TOML.
/// Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SgaConfig {
    pub migration: MigrationConfig,
    pub observability: ObservabilityConfig,
}

impl SgaConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> SgaResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> SgaResult<()> {
        self.migration.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
