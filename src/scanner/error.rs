//! Scanner error types.

use crate::report::ReportError;
use crate::source::SourceError;

/// Scanner error type.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("source returned no quotes")]
    NoQuotes,
}
