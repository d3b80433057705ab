//! Outcome of a single scan.

use std::path::PathBuf;

use rust_decimal::Decimal;

/// Per-account figures of a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStats {
    pub account: String,
    pub evaluated: usize,
    pub profitable: usize,
    /// Sum of positive net profits.
    pub total_profit: Decimal,
    /// Fund id of the first ranked result.
    pub top_fund: Option<String>,
    pub export_path: Option<PathBuf>,
}

/// Scan statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanStats {
    pub total_quotes: usize,
    pub eligible: usize,
    pub accounts: Vec<AccountStats>,
}
