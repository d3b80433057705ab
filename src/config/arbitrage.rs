//! Opportunity selection and evaluation settings.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{ArbitrageMode, Quantity, RankMetric};

/// Arbitrage evaluation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ArbitrageConfig {
    /// Which side of the divergence to trade (default: premium).
    #[serde(default)]
    pub mode: ArbitrageMode,
    /// Minimum absolute divergence in percent, inclusive (e.g. "1.5"; default: 0).
    #[serde(default)]
    pub min_divergence: Decimal,
    /// Shares subscribed per fund (default: 10000, must be positive).
    #[serde(default)]
    pub quantity: Quantity,
    /// Ranking metric: "profit" or "profit_rate" (default: profit).
    #[serde(default)]
    pub rank_by: RankMetric,
    /// Best opportunity first (default: true).
    #[serde(default = "default_true")]
    pub descending: bool,
}

impl Default for ArbitrageConfig {
    fn default() -> Self {
        Self {
            mode: ArbitrageMode::default(),
            min_divergence: Decimal::ZERO,
            quantity: Quantity::default(),
            rank_by: RankMetric::default(),
            descending: true,
        }
    }
}

fn default_true() -> bool {
    true
}
