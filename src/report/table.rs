//! Ranked table per account.

use std::fmt::Write;

use rust_decimal::Decimal;

use super::{format_decimal, saturating_sum, truncate_chars};
use crate::domain::{AccountCostModel, ArbitrageResult, Quantity};

const RULE_WIDTH: usize = 140;

/// Renders the ranked results of one account as a fixed-width table.
pub fn render_table(
    results: &[ArbitrageResult<'_>],
    account: &AccountCostModel,
    quantity: Quantity,
) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(
        out,
        "账户: {} | 佣金: 万{} | 最低佣金: {}元 | 申购数量: {}",
        account.name,
        format_decimal(account.commission_per_ten_thousand(), 0),
        account.min_commission.normalize(),
        quantity
    );
    let _ = writeln!(out, "{}", heavy);

    let _ = writeln!(
        out,
        "{:<5}{:<10}{:<16}{:<10}{:<10}{:<10}{:<10}{:<10}{:<12}{:<10}{:<12}",
        "排名", "代码", "名称", "场内价", "净值", "溢价率", "申购费", "成交量", "收益(元)", "收益率", "申购状态"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for (i, r) in results.iter().enumerate() {
        let q = r.quote;
        let _ = writeln!(
            out,
            "{:<5}{:<10}{:<16}{:<10}{:<10}{:<10}{:<10}{:<10}{:<12}{:<10}{:<12}",
            i + 1,
            q.fund_id,
            truncate_chars(&q.fund_name, 14),
            format_decimal(q.price, 4),
            format_decimal(q.nav, 4),
            format!("{}%", format_decimal(q.divergence_rate, 2)),
            q.apply_fee,
            format_decimal(q.volume, 4),
            format_decimal(r.net_profit, 2),
            format!("{}%", format_decimal(r.profit_rate, 2)),
            truncate_chars(&q.apply_status, 10),
        );
    }

    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "总计基金数: {}", results.len());

    if !results.is_empty() {
        let total_profit = saturating_sum(results.iter().map(|r| r.net_profit));
        let rate_sum = saturating_sum(results.iter().map(|r| r.profit_rate));
        let avg_rate = rate_sum / Decimal::from(results.len());
        let _ = writeln!(
            out,
            "总收益: {} 元 | 平均收益率: {}%",
            format_decimal(total_profit, 2),
            format_decimal(avg_rate, 2)
        );
    }

    out
}
