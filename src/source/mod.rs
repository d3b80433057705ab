//! Market-data sources producing fund quote snapshots.

mod coerce;
mod jisilu;

pub use coerce::{coerce_decimal, coerce_string};
pub use jisilu::{JisiluClient, JisiluConfig};

use crate::domain::FundQuote;
use async_trait::async_trait;
use thiserror::Error;

/// Source errors.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider answered with a non-success status.
    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },

    /// Response did not carry a `rows` array.
    #[error("response has no rows field")]
    MissingRows,
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// QuoteSource fetches a complete quote snapshot.
///
/// Numeric fields must already be coerced (malformed values become zero) and
/// fee and channel fields classified before quotes leave the source.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches the current snapshot.
    async fn fetch_quotes(&self) -> Result<Vec<FundQuote>>;

    /// Name identifies the provider in logs (e.g. "jisilu").
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests;
