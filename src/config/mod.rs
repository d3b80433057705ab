//! Configuration loading and validation for the LOF arbitrage scanner.
//!
//! Uses serde_yaml to load YAML configuration files with support for
//! environment variable overrides of the run parameters.

mod app;
mod arbitrage;
mod duration;
mod error;
mod report;
mod source;

pub use app::{AppConfig, LOG_LEVELS};
pub use arbitrage::ArbitrageConfig;
pub use error::ConfigError;
pub use report::ReportConfig;
pub use source::SourceConfig;

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::{env, fs};

use crate::domain::{AccountCostModel, ArbitrageMode, Quantity};

/// Overrides `arbitrage.quantity`.
pub const ENV_QUANTITY: &str = "LOF_QUANTITY";
/// Overrides `arbitrage.min_divergence`.
pub const ENV_MIN_DIVERGENCE: &str = "LOF_MIN_DIVERGENCE";
/// Overrides `arbitrage.mode`.
pub const ENV_MODE: &str = "LOF_MODE";

/// Root configuration structure.
///
/// Required sections: app, accounts.
/// Optional sections: arbitrage, source, report.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    pub app: AppConfig,
    /// Brokerage accounts to evaluate, in report order.
    pub accounts: Vec<AccountCostModel>,
    /// Mode, threshold, quantity and ranking.
    #[serde(default)]
    pub arbitrage: ArbitrageConfig,
    /// Market-data endpoint settings.
    #[serde(default)]
    pub source: SourceConfig,
    /// Table, summary and export output.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then the YAML file, then applies overrides from
    /// `LOF_QUANTITY`, `LOF_MIN_DIVERGENCE` and `LOF_MODE`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Replace run parameters with values from `lookup` (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_QUANTITY) {
            let shares: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::bad_override(ENV_QUANTITY, &raw, "not an integer"))?;
            self.arbitrage.quantity = Quantity::new(shares)
                .map_err(|e| ConfigError::bad_override(ENV_QUANTITY, &raw, e))?;
        }

        if let Some(raw) = lookup(ENV_MIN_DIVERGENCE) {
            self.arbitrage.min_divergence = raw
                .trim()
                .parse::<Decimal>()
                .map_err(|_| ConfigError::bad_override(ENV_MIN_DIVERGENCE, &raw, "not a number"))?;
        }

        if let Some(raw) = lookup(ENV_MODE) {
            self.arbitrage.mode = raw
                .parse::<ArbitrageMode>()
                .map_err(|e| ConfigError::bad_override(ENV_MODE, &raw, e))?;
        }

        Ok(())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if let Some(ref level) = self.app.log_level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "app.log_level: unknown level {}",
                    level
                )));
            }
        }

        if self.accounts.is_empty() {
            return Err(ConfigError::Validation(
                "at least one account is required".into(),
            ));
        }

        let mut names = HashSet::new();
        for account in &self.accounts {
            if account.name.is_empty() {
                return Err(ConfigError::Validation("account name is required".into()));
            }
            if !names.insert(account.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "account {}: duplicate name",
                    account.name
                )));
            }
            if account.commission_rate < Decimal::ZERO {
                return Err(ConfigError::Validation(format!(
                    "account {}: commission_rate must not be negative",
                    account.name
                )));
            }
            if account.min_commission < Decimal::ZERO {
                return Err(ConfigError::Validation(format!(
                    "account {}: min_commission must not be negative",
                    account.name
                )));
            }
            if account.transfer_fee < Decimal::ZERO {
                return Err(ConfigError::Validation(format!(
                    "account {}: transfer_fee must not be negative",
                    account.name
                )));
            }
        }

        if self.arbitrage.min_divergence < Decimal::ZERO {
            return Err(ConfigError::Validation(
                "arbitrage.min_divergence must not be negative".into(),
            ));
        }

        if self.report.export && self.report.export_dir.is_empty() {
            return Err(ConfigError::Validation(
                "report.export_dir is required when export is enabled".into(),
            ));
        }

        Ok(())
    }
}
