//! One end-to-end arbitrage scan.
//!
//! Coordinates the quote source, opportunity filter, per-account evaluation,
//! ranking and report output.

mod error;
mod stats;

pub use error::ScanError;
pub use stats::{AccountStats, ScanStats};

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::arbitrage::{AccountResults, evaluate_accounts, filter_opportunities, rank};
use crate::config::Config;
use crate::domain::{AccountCostModel, ArbitrageMode, ArbitrageResult, FundQuote};
use crate::report::{export_results, saturating_sum, render_summary, render_table};
use crate::source::QuoteSource;

/// Scanner runs the fetch, filter, evaluate, rank and report pipeline.
pub struct Scanner {
    cfg: Config,
    source: Arc<dyn QuoteSource>,
}

impl Scanner {
    /// Creates a new Scanner.
    pub fn new(cfg: Config, source: Arc<dyn QuoteSource>) -> Self {
        Self { cfg, source }
    }

    /// Fetches a snapshot and processes it.
    pub async fn run(&self) -> Result<ScanStats, ScanError> {
        info!(
            app = %self.cfg.app.name,
            source = self.source.name(),
            mode = %self.cfg.arbitrage.mode,
            min_divergence = %self.cfg.arbitrage.min_divergence,
            quantity = %self.cfg.arbitrage.quantity,
            accounts = self.cfg.accounts.len(),
            "Starting scan"
        );

        let quotes = self.source.fetch_quotes().await?;
        if quotes.is_empty() {
            return Err(ScanError::NoQuotes);
        }

        self.process(&quotes)
    }

    /// Filters, evaluates and reports a fully materialised snapshot.
    pub fn process(&self, quotes: &[FundQuote]) -> Result<ScanStats, ScanError> {
        let arb = &self.cfg.arbitrage;

        let eligible = filter_opportunities(quotes, arb.min_divergence, arb.mode);
        info!(
            total = quotes.len(),
            eligible = eligible.len(),
            mode = %arb.mode,
            "Opportunities filtered"
        );

        let mut stats = ScanStats {
            total_quotes: quotes.len(),
            eligible: eligible.len(),
            accounts: Vec::new(),
        };

        if eligible.is_empty() {
            info!(
                min_divergence = %arb.min_divergence,
                total = quotes.len(),
                "No opportunity above threshold, consider lowering it or retrying later"
            );
            return Ok(stats);
        }

        if arb.mode == ArbitrageMode::Discount {
            warn!("discount mode: quotes are evaluated with the premium cash flow");
        }

        for set in evaluate_accounts(&eligible, &self.cfg.accounts, arb.quantity) {
            let AccountResults { account, results } = set;
            let ranked = rank(results, arb.rank_by, arb.descending);
            stats.accounts.push(self.report_account(account, &ranked)?);
        }

        Ok(stats)
    }

    /// Prints and exports one account's ranked results.
    fn report_account(
        &self,
        account: &AccountCostModel,
        ranked: &[ArbitrageResult<'_>],
    ) -> Result<AccountStats, ScanError> {
        let quantity = self.cfg.arbitrage.quantity;
        let report = &self.cfg.report;

        if report.print_table {
            println!("{}", render_table(ranked, account, quantity));
        }

        if report.print_summary {
            let now = chrono::Local::now().naive_local();
            if let Some(summary) = render_summary(ranked, quantity, now) {
                println!("{}", summary);
            }
        }

        let export_path = if report.export {
            Some(export_results(
                ranked,
                account,
                quantity,
                Path::new(&report.export_dir),
                report.format,
            )?)
        } else {
            None
        };

        let profitable: Vec<_> = ranked.iter().filter(|r| r.is_profitable()).collect();
        let total_profit = saturating_sum(profitable.iter().map(|r| r.net_profit));

        info!(
            account = %account.name,
            evaluated = ranked.len(),
            profitable = profitable.len(),
            total_profit = %total_profit,
            "Account evaluated"
        );

        Ok(AccountStats {
            account: account.name.clone(),
            evaluated: ranked.len(),
            profitable: profitable.len(),
            total_profit,
            top_fund: ranked.first().map(|r| r.quote.fund_id.clone()),
            export_path,
        })
    }
}
