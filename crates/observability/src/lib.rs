//! Tracing and logging setup shared by binaries and test harnesses.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), config::ConfigError> {
    let config = config::ObservabilityConfig::from_env(&mockable::DefaultEnv::new())?;
    tracing::init_with(&config);
    Ok(())
}

/// Logging configuration (filter directives, output format).
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
