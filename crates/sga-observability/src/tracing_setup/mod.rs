//! Subscriber installation plus the spans and events emitted during migration.

pub mod events;
pub mod spans;

use sga_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Returns `false` if a global
/// subscriber was already installed (e.g. by the host process or another test).
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.log_targets);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
