//! Premium arbitrage profit calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace};

use crate::domain::{AccountCostModel, ArbitrageResult, FundQuote, Quantity};

/// Evaluates subscribing `quantity` shares at NAV and selling them on the exchange.
///
/// Steps, in order:
/// 1. subscription amount = NAV x quantity
/// 2. subscription fee = subscription amount x fee rate
/// 3. actual cost = subscription amount + subscription fee
/// 4. sale amount = exchange price x quantity
/// 5. sale commission = max(sale amount x commission rate, minimum commission)
/// 6. net profit = sale amount - actual cost - sale commission - transfer fee
/// 7. profit rate = net profit / actual cost x 100, or 0 when the cost is not positive
///
/// Amounts that leave the decimal range saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn evaluate<'a>(
    quote: &'a FundQuote,
    account: &'a AccountCostModel,
    quantity: Quantity,
) -> ArbitrageResult<'a> {
    let fund = quote.fund_id.as_str();
    let shares = quantity.as_decimal();

    let subscription_fee_rate = quote.subscription_fee.fraction();
    let subscription_amount = step(
        quote.nav.checked_mul(shares),
        || quote.nav.saturating_mul(shares),
        "subscription_amount",
        fund,
    );
    let subscription_fee = step(
        subscription_amount.checked_mul(subscription_fee_rate),
        || subscription_amount.saturating_mul(subscription_fee_rate),
        "subscription_fee",
        fund,
    );
    let actual_cost = step(
        subscription_amount.checked_add(subscription_fee),
        || subscription_amount.saturating_add(subscription_fee),
        "actual_cost",
        fund,
    );

    let sale_amount = step(
        quote.price.checked_mul(shares),
        || quote.price.saturating_mul(shares),
        "sale_amount",
        fund,
    );
    let sale_commission = commission(sale_amount, account);

    let net_profit = [actual_cost, sale_commission, account.transfer_fee]
        .into_iter()
        .fold(sale_amount, |acc, cost| {
            step(
                acc.checked_sub(cost),
                || acc.saturating_sub(cost),
                "net_profit",
                fund,
            )
        });
    let profit_rate = profit_rate(net_profit, actual_cost);

    trace!(
        fund = %quote.fund_id,
        account = %account.name,
        net_profit = %net_profit,
        profit_rate = %profit_rate,
        "evaluated quote"
    );

    ArbitrageResult {
        quote,
        account,
        quantity,
        subscription_fee_rate,
        subscription_amount,
        subscription_fee,
        actual_cost,
        sale_amount,
        sale_commission,
        net_profit,
        profit_rate,
    }
}

/// Commission on an exchange sale, never below the account minimum.
pub fn commission(sale_amount: Decimal, account: &AccountCostModel) -> Decimal {
    sale_amount
        .checked_mul(account.commission_rate)
        .unwrap_or_else(|| sale_amount.saturating_mul(account.commission_rate))
        .max(account.min_commission)
}

/// Net profit as a percentage of cost. A zero cost means a degenerate quote
/// (zero NAV) and yields a neutral 0, as does a ratio outside the decimal range.
pub fn profit_rate(net_profit: Decimal, actual_cost: Decimal) -> Decimal {
    if actual_cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match net_profit
        .checked_div(actual_cost)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
    {
        Some(rate) => rate,
        None => {
            debug!(
                net_profit = %net_profit,
                actual_cost = %actual_cost,
                "profit rate out of range, using 0"
            );
            Decimal::ZERO
        }
    }
}

fn step(
    checked: Option<Decimal>,
    saturated: impl FnOnce() -> Decimal,
    name: &'static str,
    fund: &str,
) -> Decimal {
    checked.unwrap_or_else(|| {
        debug!(fund, step = name, "decimal overflow, saturating");
        saturated()
    })
}
