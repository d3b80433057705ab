//! Human-readable reports and file export for ranked results.
//!
//! Reporting only formats values computed by the arbitrage module and never
//! recomputes them, apart from totals and averages for the footer lines.

mod export;
mod summary;
mod table;

pub use export::{ExportFormat, export_csv, export_file_name, export_json, export_results};
pub use summary::render_summary;
pub use table::render_table;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Report errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Formats a decimal with a fixed number of places, rounding half away from zero.
pub fn format_decimal(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Sums decimals, clamping at the decimal range instead of overflowing.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// Keeps at most `max_chars` characters.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
