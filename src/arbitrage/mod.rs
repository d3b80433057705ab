//! Profit calculation and opportunity ranking.
//!
//! Everything in here is synchronous and free of I/O: quotes and accounts are
//! fully materialised before evaluation and results are fresh values that
//! borrow their inputs immutably.

mod calculator;
mod filter;
mod ranker;

pub use calculator::{commission, evaluate, profit_rate};
pub use filter::{filter_opportunities, is_opportunity};
pub use ranker::rank;

use tracing::debug;

use crate::domain::{AccountCostModel, ArbitrageResult, FundQuote, Quantity};

/// Results of one account's evaluation over the filtered quotes.
#[derive(Debug, Clone)]
pub struct AccountResults<'a> {
    pub account: &'a AccountCostModel,
    pub results: Vec<ArbitrageResult<'a>>,
}

/// Evaluates every quote for a single account, preserving quote order.
pub fn evaluate_all<'a>(
    quotes: &[&'a FundQuote],
    account: &'a AccountCostModel,
    quantity: Quantity,
) -> Vec<ArbitrageResult<'a>> {
    quotes
        .iter()
        .copied()
        .map(|quote| {
            if quote.subscription_fee.is_default() {
                debug!(
                    fund = %quote.fund_id,
                    raw_fee = %quote.apply_fee,
                    "unreadable subscription fee, using default rate"
                );
            }
            evaluate(quote, account, quantity)
        })
        .collect()
}

/// Evaluates the same quote set independently for each account.
pub fn evaluate_accounts<'a>(
    quotes: &[&'a FundQuote],
    accounts: &'a [AccountCostModel],
    quantity: Quantity,
) -> Vec<AccountResults<'a>> {
    accounts
        .iter()
        .map(|account| {
            let results = evaluate_all(quotes, account, quantity);
            debug!(account = %account.name, results = results.len(), "account evaluated");
            AccountResults { account, results }
        })
        .collect()
}
