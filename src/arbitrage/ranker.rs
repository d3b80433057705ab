//! Result ordering.

use rust_decimal::Decimal;

use crate::domain::{ArbitrageResult, RankMetric};

/// Sorts results by `metric`. The sort is stable: entries with equal
/// metric values keep their input order in both directions.
pub fn rank<'a>(
    mut results: Vec<ArbitrageResult<'a>>,
    metric: RankMetric,
    descending: bool,
) -> Vec<ArbitrageResult<'a>> {
    results.sort_by(|a, b| {
        let ord = metric_value(a, metric).cmp(&metric_value(b, metric));
        if descending { ord.reverse() } else { ord }
    });
    results
}

fn metric_value(result: &ArbitrageResult<'_>, metric: RankMetric) -> Decimal {
    match metric {
        RankMetric::Profit => result.net_profit,
        RankMetric::ProfitRate => result.profit_rate,
    }
}
