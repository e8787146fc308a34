mod config_error;

pub use config_error::ConfigError;

/// Top-level error for the SGA QA migration workspace.
///
/// Field-shape problems inside a record are never errors: the migrator
/// coerces them and reports a [`crate::Coercion`]. These variants cover the
/// edges around it.
#[derive(Debug, thiserror::Error)]
pub enum SgaError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown record kind: {name}")]
    UnknownRecordKind { name: String },

    #[error("malformed record JSON: {reason}")]
    MalformedJson { reason: String },
}

pub type SgaResult<T> = Result<T, SgaError>;
