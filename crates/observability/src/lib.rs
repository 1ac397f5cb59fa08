//! Tracing and logging setup shared by processes hosting the order pipeline.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unreadable configuration falls back to the defaults.
pub fn init() {
    let config = config::ObservabilityConfig::from_env().unwrap_or_default();
    tracing::init_with(&config);
}

/// Environment-driven configuration.
pub mod config;

/// Tracing subscriber setup (filters, formatting).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
