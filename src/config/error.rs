//! Errors raised while loading the scanner configuration.

use thiserror::Error;

/// ConfigError covers every way `Config::load` can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("invalid config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// An environment override carried a value the run parameter cannot take.
    #[error("environment override {key}={value}: {reason}")]
    Override {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl ConfigError {
    pub(crate) fn bad_override(key: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::Override {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
