//! Brokerage account cost model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// AccountCostModel describes what a brokerage account charges on the exchange sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCostModel {
    /// Label used in reports and export file names.
    pub name: String,
    /// Commission as a fraction of sale proceeds (e.g. 0.0003).
    pub commission_rate: Decimal,
    /// Floor for the commission of a single sale.
    pub min_commission: Decimal,
    /// Fixed fee charged once per trade.
    #[serde(default)]
    pub transfer_fee: Decimal,
}

impl AccountCostModel {
    /// Creates a cost model without a transfer fee.
    pub fn new(name: impl Into<String>, commission_rate: Decimal, min_commission: Decimal) -> Self {
        Self {
            name: name.into(),
            commission_rate,
            min_commission,
            transfer_fee: Decimal::ZERO,
        }
    }

    pub fn with_transfer_fee(mut self, transfer_fee: Decimal) -> Self {
        self.transfer_fee = transfer_fee;
        self
    }

    /// Commission rate in basis points of ten thousand (0.0003 -> 3).
    pub fn commission_per_ten_thousand(&self) -> Decimal {
        self.commission_rate * dec!(10000)
    }
}
