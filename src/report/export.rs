//! File export of ranked results, as CSV or JSON.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ReportError;
use crate::domain::{AccountCostModel, ArbitrageResult, Quantity};

/// ExportFormat selects the file written per account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One header line plus one line per ranked result.
    #[default]
    Csv,
    /// Pretty-printed array of row objects.
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Column names, in `ExportRow` field order.
const CSV_HEADER: [&str; 16] = [
    "rank",
    "fund_id",
    "fund_name",
    "price",
    "nav",
    "divergence_rate",
    "apply_fee",
    "volume",
    "amount",
    "apply_status",
    "redeem_status",
    "issuer",
    "quantity",
    "profit",
    "profit_rate",
    "account",
];

/// One exported row, in rank order.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    rank: usize,
    fund_id: &'a str,
    fund_name: &'a str,
    price: Decimal,
    nav: Decimal,
    divergence_rate: Decimal,
    apply_fee: &'a str,
    volume: Decimal,
    amount: Decimal,
    apply_status: &'a str,
    redeem_status: &'a str,
    issuer: &'a str,
    quantity: u32,
    profit: Decimal,
    profit_rate: Decimal,
    account: &'a str,
}

fn export_rows<'a>(
    results: &'a [ArbitrageResult<'_>],
    account: &'a AccountCostModel,
    quantity: Quantity,
) -> Vec<ExportRow<'a>> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| ExportRow {
            rank: i + 1,
            fund_id: &r.quote.fund_id,
            fund_name: &r.quote.fund_name,
            price: r.quote.price,
            nav: r.quote.nav,
            divergence_rate: r.quote.divergence_rate,
            apply_fee: &r.quote.apply_fee,
            volume: r.quote.volume,
            amount: r.quote.amount,
            apply_status: &r.quote.apply_status,
            redeem_status: &r.quote.redeem_status,
            issuer: &r.quote.issuer,
            quantity: quantity.get(),
            profit: r.net_profit,
            profit_rate: r.profit_rate,
            account: &account.name,
        })
        .collect()
}

/// File name for an account's export, e.g. `lof_arbitrage_A_low.csv`.
///
/// Every character other than a letter or digit becomes `_`, so the name
/// always stays inside the export directory.
pub fn export_file_name(account: &AccountCostModel, format: ExportFormat) -> String {
    let safe_name: String = account
        .name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("lof_arbitrage_{}.{}", safe_name, format.extension())
}

/// Writes one account's ranked results into `dir` in the given format.
pub fn export_results(
    results: &[ArbitrageResult<'_>],
    account: &AccountCostModel,
    quantity: Quantity,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ReportError> {
    match format {
        ExportFormat::Csv => export_csv(results, account, quantity, dir),
        ExportFormat::Json => export_json(results, account, quantity, dir),
    }
}

/// Writes the ranked results of one account as CSV and returns the file path.
pub fn export_csv(
    results: &[ArbitrageResult<'_>],
    account: &AccountCostModel,
    quantity: Quantity,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(account, ExportFormat::Csv));
    let rows = export_rows(results, account, quantity);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record(CSV_HEADER)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(account = %account.name, rows = rows.len(), path = %path.display(), "results exported");
    Ok(path)
}

/// Writes the ranked results of one account as JSON and returns the file path.
pub fn export_json(
    results: &[ArbitrageResult<'_>],
    account: &AccountCostModel,
    quantity: Quantity,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(account, ExportFormat::Json));
    let rows = export_rows(results, account, quantity);

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.flush()?;

    info!(account = %account.name, rows = rows.len(), path = %path.display(), "results exported");
    Ok(path)
}
