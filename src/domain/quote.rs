//! Fund quote snapshot as delivered by the market-data source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FeeRate;

/// ChannelStatus is the state of the direct subscription channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelStatus {
    /// Fully open (`开放申购`).
    Open,
    /// Open with a cap on large orders (`限大额`).
    LimitedLarge,
    /// Suspended or unknown.
    Closed,
}

impl ChannelStatus {
    /// Classifies a raw status string as published by the data provider.
    pub fn classify(raw: &str) -> Self {
        if raw.contains("开放") {
            ChannelStatus::Open
        } else if raw.contains("限大额") {
            ChannelStatus::LimitedLarge
        } else {
            ChannelStatus::Closed
        }
    }

    /// Returns true if an order can actually be placed through the channel.
    pub fn accepts_orders(&self) -> bool {
        matches!(self, ChannelStatus::Open | ChannelStatus::LimitedLarge)
    }
}

impl std::fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelStatus::Open => write!(f, "open"),
            ChannelStatus::LimitedLarge => write!(f, "limited_large"),
            ChannelStatus::Closed => write!(f, "closed"),
        }
    }
}

/// FundQuote is one listed open-end fund in a market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundQuote {
    /// Fund code, unique within a snapshot (e.g. "161725").
    pub fund_id: String,
    /// Display name.
    pub fund_name: String,
    /// Last exchange price.
    pub price: Decimal,
    /// Net asset value, the subscription price.
    pub nav: Decimal,
    /// Divergence rate in percent. Negative means premium, positive discount.
    pub divergence_rate: Decimal,
    /// Subscription fee exactly as published.
    pub apply_fee: String,
    /// Subscription fee classified at ingestion.
    pub subscription_fee: FeeRate,
    /// Redemption fee exactly as published.
    pub redeem_fee: String,
    /// Subscription status exactly as published.
    pub apply_status: String,
    /// Subscription channel state classified at ingestion.
    pub subscription_channel: ChannelStatus,
    /// Redemption status exactly as published.
    pub redeem_status: String,
    /// Traded volume (10k lots).
    pub volume: Decimal,
    /// Traded value (10k).
    pub amount: Decimal,
    /// Issuing fund company.
    pub issuer: String,
}

impl FundQuote {
    /// Returns true if the exchange price is above net asset value.
    pub fn is_premium(&self) -> bool {
        self.divergence_rate < Decimal::ZERO
    }

    /// Returns true if the exchange price is below net asset value.
    pub fn is_discount(&self) -> bool {
        self.divergence_rate > Decimal::ZERO
    }
}
