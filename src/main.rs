mod arbitrage;
mod config;
mod domain;
mod report;
mod scanner;
mod source;

use config::Config;
use scanner::{ScanError, Scanner};
use source::JisiluClient;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = parse_config_path();

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config {}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.app.log_level.as_deref());
    info!(config = %config_path, env = %config.app.env, "Configuration loaded");

    let client = match JisiluClient::from_config(&config.source) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create quote source");
            return ExitCode::FAILURE;
        }
    };

    let scanner = Scanner::new(config, Arc::new(client));

    match scanner.run().await {
        Ok(stats) => {
            info!(
                total = stats.total_quotes,
                eligible = stats.eligible,
                accounts = stats.accounts.len(),
                "Scan completed"
            );
            for account in &stats.accounts {
                info!(
                    account = %account.account,
                    evaluated = account.evaluated,
                    profitable = account.profitable,
                    total_profit = %account.total_profit,
                    top_fund = ?account.top_fund,
                    export = ?account.export_path,
                    "Account result"
                );
            }
            ExitCode::SUCCESS
        }
        Err(ScanError::NoQuotes) => {
            warn!("No quotes received, check the network connection");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Scan failed");
            ExitCode::FAILURE
        }
    }
}
