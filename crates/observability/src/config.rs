//! Environment-driven logging configuration.

use core::str::FromStr;

use mockable::Env;
use thiserror::Error;

const FILTER_ENV: &str = "RUST_LOG";
const FORMAT_ENV: &str = "INVOICEKIT_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line, human-readable output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::UnknownLogFormat(s.to_owned())),
        }
    }
}

/// Errors raised while reading logging configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format {0:?}; expected json|pretty")]
    UnknownLogFormat(String),
}

/// Settings for [`crate::tracing::init_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,invoicekit_invoicing=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `INVOICEKIT_LOG_FORMAT`, falling back to defaults
    /// for unset or blank values.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let filter = env
            .string(FILTER_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());

        let format = match env.string(FORMAT_ENV) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use std::collections::HashMap;

    fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        env
    }

    #[test]
    fn defaults_when_unset() {
        let config = ObservabilityConfig::from_env(&mock_env(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let env = mock_env(&[
            (FILTER_ENV, "warn,invoicekit_invoicing=debug"),
            (FORMAT_ENV, "Pretty"),
        ]);
        let config = ObservabilityConfig::from_env(&env).unwrap();
        assert_eq!(config.filter, "warn,invoicekit_invoicing=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_use_defaults() {
        let env = mock_env(&[(FILTER_ENV, "  "), (FORMAT_ENV, "")]);
        assert_eq!(
            ObservabilityConfig::from_env(&env).unwrap(),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let env = mock_env(&[(FORMAT_ENV, "xml")]);
        let err = ObservabilityConfig::from_env(&env).unwrap_err();
        assert_eq!(err, ConfigError::UnknownLogFormat("xml".to_owned()));
        assert_eq!(
            err.to_string(),
            "unknown log format \"xml\"; expected json|pretty"
        );
    }
}
