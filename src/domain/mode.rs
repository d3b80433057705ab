//! Arbitrage direction and ranking selectors.

use serde::{Deserialize, Serialize};

/// ArbitrageMode selects which side of the divergence is traded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArbitrageMode {
    /// Exchange price above NAV: subscribe at NAV, sell on the exchange.
    #[default]
    Premium,
    /// Exchange price below NAV.
    Discount,
}

impl std::fmt::Display for ArbitrageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArbitrageMode::Premium => write!(f, "premium"),
            ArbitrageMode::Discount => write!(f, "discount"),
        }
    }
}

impl std::str::FromStr for ArbitrageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "premium" => Ok(ArbitrageMode::Premium),
            "discount" => Ok(ArbitrageMode::Discount),
            _ => Err(format!("Unknown arbitrage mode: {}", s)),
        }
    }
}

/// RankMetric is the figure results are ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    /// Absolute net profit.
    #[default]
    Profit,
    /// Net profit relative to the actual cost.
    ProfitRate,
}

impl std::fmt::Display for RankMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankMetric::Profit => write!(f, "profit"),
            RankMetric::ProfitRate => write!(f, "profit_rate"),
        }
    }
}

impl std::str::FromStr for RankMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "profit" => Ok(RankMetric::Profit),
            "profit_rate" => Ok(RankMetric::ProfitRate),
            _ => Err(format!("Unknown rank metric: {}", s)),
        }
    }
}
