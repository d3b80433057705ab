//! Daily summary of profitable funds.

use std::fmt::Write;

use chrono::NaiveDateTime;

use super::{format_decimal, saturating_sum};
use crate::domain::{ArbitrageResult, Quantity};

/// Renders the summary for the profitable subset of `results`.
///
/// Returns `None` for an empty result set. When nothing is profitable a
/// single notice is returned instead of the per-fund blocks.
pub fn render_summary(
    results: &[ArbitrageResult<'_>],
    quantity: Quantity,
    now: NaiveDateTime,
) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let profitable: Vec<&ArbitrageResult<'_>> =
        results.iter().filter(|r| r.is_profitable()).collect();

    if profitable.is_empty() {
        return Some("今日无正收益套利机会\n".to_string());
    }

    let total_profit = saturating_sum(profitable.iter().map(|r| r.net_profit));
    let capital = saturating_sum(profitable.iter().map(|r| r.subscription_amount));

    let mut out = String::new();
    let _ = writeln!(out, "发现可套利基金！今日预计收益：+{} 元", format_decimal(total_profit, 2));
    let _ = writeln!(out, "巡逻时间：{}", now.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "预计收益：+{}元", format_decimal(total_profit, 2));
    let _ = writeln!(out, "占用资金：{}元", format_decimal(capital, 0));
    let _ = writeln!(out);

    for (i, r) in profitable.iter().enumerate() {
        let q = r.quote;
        let _ = writeln!(out, "【{}】{}（{}）", i + 1, q.fund_name, q.fund_id);
        let _ = writeln!(out, "  [溢价率]：{}%", format_decimal(q.divergence_rate, 2));
        let _ = writeln!(out, "  [申购费]：{}", q.apply_fee);
        let _ = writeln!(out, "  [申购价]：{}元", format_decimal(q.nav, 4));
        let _ = writeln!(out, "  [场内价]：{}元", format_decimal(q.price, 4));
        let _ = writeln!(out, "  [申购量]：{}份", quantity);
        let _ = writeln!(out, "  [预计收益]：+{}元", format_decimal(r.net_profit, 2));
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "=".repeat(50));
    Some(out)
}
