//! HTTP client for the Jisilu LOF list endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::{QuoteSource, Result, SourceError, coerce_decimal, coerce_string};
use crate::config::SourceConfig;
use crate::domain::{ChannelStatus, FeeRate, FundQuote};

/// Production LOF list endpoint.
pub const BASE_URL: &str = "https://www.jisilu.cn/data/lof/index_lof_list/";

/// Page the list endpoint expects as referer.
const DEFAULT_REFERER: &str = "https://www.jisilu.cn/data/lof/";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Rows per request.
const DEFAULT_ROWS: u32 = 100;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fee assumed when the provider omits the field.
const DEFAULT_APPLY_FEE: &str = "0.12%";

/// Configuration for creating a new JisiluClient.
#[derive(Debug, Clone)]
pub struct JisiluConfig {
    pub base_url: String,
    pub rows: u32,
    pub timeout: Duration,
    pub user_agent: String,
    pub referer: String,
}

impl Default for JisiluConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            rows: DEFAULT_ROWS,
            timeout: REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

impl From<&SourceConfig> for JisiluConfig {
    fn from(cfg: &SourceConfig) -> Self {
        let defaults = JisiluConfig::default();
        Self {
            base_url: cfg.url.clone().unwrap_or(defaults.base_url),
            rows: cfg.rows.filter(|r| *r > 0).unwrap_or(defaults.rows),
            timeout: if cfg.timeout.is_zero() {
                defaults.timeout
            } else {
                cfg.timeout
            },
            user_agent: cfg.user_agent.clone().unwrap_or(defaults.user_agent),
            referer: cfg.referer.clone().unwrap_or(defaults.referer),
        }
    }
}

/// JisiluClient fetches the LOF list and maps each row to a [`FundQuote`].
pub struct JisiluClient {
    config: JisiluConfig,
    http_client: HttpClient,
}

impl JisiluClient {
    /// Creates a new client with browser-like headers.
    pub fn new(config: JisiluConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        if let Ok(value) = HeaderValue::from_str(&config.referer) {
            headers.insert(REFERER, value);
        }

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates a new client from the `source` config section.
    pub fn from_config(source_config: &SourceConfig) -> Result<Self> {
        Self::new(JisiluConfig::from(source_config))
    }

    /// Builds the list URL. The timestamp busts the provider's cache.
    pub fn list_url(&self, timestamp_millis: i64) -> String {
        let params = [
            ("___jsl", format!("LST___t={}", timestamp_millis)),
            ("only_owned", String::new()),
            ("rp", self.config.rows.to_string()),
        ];

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.base_url, query)
    }

    /// Parses a list response body into quotes.
    pub fn parse_response(body: &[u8]) -> Result<Vec<FundQuote>> {
        #[derive(Deserialize)]
        struct ListResponse {
            rows: Option<Vec<Row>>,
        }

        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            cell: Map<String, Value>,
        }

        let response: ListResponse = serde_json::from_slice(body)?;
        let rows = response.rows.ok_or(SourceError::MissingRows)?;

        Ok(rows.iter().map(|row| quote_from_cell(&row.cell)).collect())
    }
}

/// Maps a single `cell` object to a quote, coercing every numeric field.
pub(crate) fn quote_from_cell(cell: &Map<String, Value>) -> FundQuote {
    let apply_fee = coerce_string(cell.get("apply_fee"), DEFAULT_APPLY_FEE);
    let apply_status = coerce_string(cell.get("apply_status"), "");

    FundQuote {
        fund_id: coerce_string(cell.get("fund_id"), ""),
        fund_name: coerce_string(cell.get("fund_nm"), ""),
        price: coerce_decimal(cell.get("price")),
        nav: coerce_decimal(cell.get("fund_nav")),
        divergence_rate: coerce_decimal(cell.get("discount_rt")),
        subscription_fee: FeeRate::parse(&apply_fee),
        apply_fee,
        redeem_fee: coerce_string(cell.get("redeem_fee"), ""),
        subscription_channel: ChannelStatus::classify(&apply_status),
        apply_status,
        redeem_status: coerce_string(cell.get("redeem_status"), ""),
        volume: coerce_decimal(cell.get("volume")),
        amount: coerce_decimal(cell.get("amount")),
        issuer: coerce_string(cell.get("issuer_nm"), ""),
    }
}

#[async_trait]
impl QuoteSource for JisiluClient {
    async fn fetch_quotes(&self) -> Result<Vec<FundQuote>> {
        let url = self.list_url(chrono::Utc::now().timestamp_millis());
        info!(source = self.name(), "fetching LOF quotes");
        debug!(url = %url, "sending request");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).to_string();
            warn!(code = status.as_u16(), "provider returned error status");
            return Err(SourceError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let quotes = Self::parse_response(&body)?;
        info!(rows = quotes.len(), "LOF quotes received");
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "jisilu"
    }
}
