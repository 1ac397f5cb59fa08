use thiserror::Error;

/// Filter directive variable, shared with `tracing-subscriber`'s `EnvFilter`.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Output format variable.
pub const LOG_FORMAT_VAR: &str = "ORDERENTRY_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid ORDERENTRY_LOG_FORMAT value {0:?} (expected \"json\" or \"pretty\")")]
    InvalidLogFormat(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl core::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset or blank keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = non_blank(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match non_blank(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_VAR, "orderentry_sales=debug"),
            (LOG_FORMAT_VAR, "Pretty"),
        ]))
        .unwrap();
        assert_eq!(config.filter, "orderentry_sales=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_VAR, "  "),
            (LOG_FORMAT_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = ObservabilityConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogFormat("xml".to_string()));
    }
}
