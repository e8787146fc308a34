/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("target schema version {requested} is outside 1..={latest}")]
    UnsupportedTargetVersion { requested: u32, latest: u32 },

    #[error("invalid log level: {level}")]
    InvalidLogLevel { level: String },
}
