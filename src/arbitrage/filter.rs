//! Opportunity filtering by channel status and divergence.

use rust_decimal::Decimal;

use crate::domain::{ArbitrageMode, FundQuote};

/// Returns the quotes worth evaluating, in their original order.
///
/// `min_divergence` is a percentage and is inclusive.
pub fn filter_opportunities<'a>(
    quotes: &'a [FundQuote],
    min_divergence: Decimal,
    mode: ArbitrageMode,
) -> Vec<&'a FundQuote> {
    quotes
        .iter()
        .filter(|quote| is_opportunity(quote, min_divergence, mode))
        .collect()
}

/// Checks a single quote against the channel gate and the divergence threshold.
pub fn is_opportunity(quote: &FundQuote, min_divergence: Decimal, mode: ArbitrageMode) -> bool {
    if !quote.subscription_channel.accepts_orders() {
        return false;
    }

    match mode {
        ArbitrageMode::Premium => {
            quote.is_premium() && quote.divergence_rate.abs() >= min_divergence
        }
        ArbitrageMode::Discount => quote.is_discount() && quote.divergence_rate >= min_divergence,
    }
}
