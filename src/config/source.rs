//! Market-data source configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Settings for the LOF list endpoint. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    /// Override for the list endpoint URL.
    pub url: Option<String>,
    /// Rows requested per call (default: 100).
    pub rows: Option<u32>,
    /// HTTP timeout (default: 10s).
    #[serde(default, with = "duration")]
    pub timeout: Duration,
    /// Override for the User-Agent header.
    pub user_agent: Option<String>,
    /// Override for the Referer header.
    pub referer: Option<String>,
}
