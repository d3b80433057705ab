//! Computed arbitrage outcome for one quote under one account.

use rust_decimal::Decimal;

use super::{AccountCostModel, FundQuote, Quantity};

/// ArbitrageResult is the outcome of evaluating a single
/// (quote, account, quantity) combination.
///
/// Results borrow the quote and account they were computed from and are
/// never mutated, so evaluating several accounts over the same quotes cannot
/// overwrite one another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbitrageResult<'a> {
    pub quote: &'a FundQuote,
    pub account: &'a AccountCostModel,
    pub quantity: Quantity,
    /// Parsed subscription fee rate (fraction).
    pub subscription_fee_rate: Decimal,
    /// NAV x quantity.
    pub subscription_amount: Decimal,
    pub subscription_fee: Decimal,
    /// Subscription amount plus subscription fee.
    pub actual_cost: Decimal,
    /// Exchange price x quantity.
    pub sale_amount: Decimal,
    /// Commission after the account minimum is applied.
    pub sale_commission: Decimal,
    pub net_profit: Decimal,
    /// Net profit as a percentage of the actual cost.
    pub profit_rate: Decimal,
}

impl<'a> ArbitrageResult<'a> {
    /// Returns the (fund id, account name) pair identifying this result.
    pub fn key(&self) -> (&'a str, &'a str) {
        (self.quote.fund_id.as_str(), self.account.name.as_str())
    }

    /// Returns true if the net profit is positive.
    pub fn is_profitable(&self) -> bool {
        self.net_profit > Decimal::ZERO
    }
}
