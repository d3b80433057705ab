//! Tests for quote source helpers and response mapping.

use super::*;
use crate::config::SourceConfig;
use crate::domain::{ChannelStatus, FeeRate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use std::time::Duration;

// ==================== Coercion tests ====================

#[test]
fn test_coerce_decimal_string() {
    assert_eq!(coerce_decimal(Some(&json!("1.0500"))), dec!(1.0500));
}

#[test]
fn test_coerce_decimal_percent_string() {
    assert_eq!(coerce_decimal(Some(&json!("-3.21%"))), dec!(-3.21));
}

#[test]
fn test_coerce_decimal_thousand_separator() {
    assert_eq!(coerce_decimal(Some(&json!("1,024.5"))), dec!(1024.5));
}

#[test]
fn test_coerce_decimal_number() {
    assert_eq!(coerce_decimal(Some(&json!(1.05))), dec!(1.05));
    assert_eq!(coerce_decimal(Some(&json!(42))), dec!(42));
}

#[test]
fn test_coerce_decimal_fallbacks() {
    assert_eq!(coerce_decimal(None), Decimal::ZERO);
    assert_eq!(coerce_decimal(Some(&json!(null))), Decimal::ZERO);
    assert_eq!(coerce_decimal(Some(&json!("-"))), Decimal::ZERO);
    assert_eq!(coerce_decimal(Some(&json!(""))), Decimal::ZERO);
    assert_eq!(coerce_decimal(Some(&json!("  "))), Decimal::ZERO);
    assert_eq!(coerce_decimal(Some(&json!("abc"))), Decimal::ZERO);
    assert_eq!(coerce_decimal(Some(&json!([1, 2]))), Decimal::ZERO);
}

#[test]
fn test_coerce_string() {
    assert_eq!(coerce_string(Some(&json!("161725")), ""), "161725");
    assert_eq!(coerce_string(Some(&json!(161725)), ""), "161725");
    assert_eq!(coerce_string(None, "0.12%"), "0.12%");
    assert_eq!(coerce_string(Some(&json!(null)), "x"), "x");
}

// ==================== Response mapping tests ====================

fn fixture() -> Vec<u8> {
    json!({
        "page": 1,
        "rows": [
            {
                "id": "161725",
                "cell": {
                    "fund_id": "161725",
                    "fund_nm": "白酒基金LOF",
                    "price": "1.0500",
                    "fund_nav": "1.0000",
                    "discount_rt": "-5.00%",
                    "apply_fee": "0.12%",
                    "redeem_fee": "0.50%",
                    "apply_status": "开放申购",
                    "redeem_status": "开放赎回",
                    "volume": "1,234.56",
                    "amount": "1296.29",
                    "issuer_nm": "招商基金"
                }
            },
            {
                "id": "501018",
                "cell": {
                    "fund_id": "501018",
                    "fund_nm": "南方原油LOF",
                    "price": "-",
                    "fund_nav": null,
                    "discount_rt": "2.10",
                    "apply_status": "暂停申购",
                    "issuer_nm": "南方基金"
                }
            },
            {
                "id": "160216",
                "cell": {
                    "fund_id": "160216",
                    "fund_nm": "国泰商品LOF",
                    "price": 0.612,
                    "fund_nav": 0.6,
                    "discount_rt": -2.0,
                    "apply_fee": "0.0015",
                    "apply_status": "限大额"
                }
            }
        ],
        "total": 3
    })
    .to_string()
    .into_bytes()
}

#[test]
fn test_parse_response_maps_fields() {
    let quotes = JisiluClient::parse_response(&fixture()).unwrap();
    assert_eq!(quotes.len(), 3);

    let q = &quotes[0];
    assert_eq!(q.fund_id, "161725");
    assert_eq!(q.fund_name, "白酒基金LOF");
    assert_eq!(q.price, dec!(1.05));
    assert_eq!(q.nav, dec!(1));
    assert_eq!(q.divergence_rate, dec!(-5));
    assert_eq!(q.apply_fee, "0.12%");
    assert_eq!(q.subscription_fee, FeeRate::Percent(dec!(0.12)));
    assert_eq!(q.redeem_fee, "0.50%");
    assert_eq!(q.subscription_channel, ChannelStatus::Open);
    assert_eq!(q.redeem_status, "开放赎回");
    assert_eq!(q.volume, dec!(1234.56));
    assert_eq!(q.amount, dec!(1296.29));
    assert_eq!(q.issuer, "招商基金");
}

#[test]
fn test_parse_response_coerces_missing_values() {
    let quotes = JisiluClient::parse_response(&fixture()).unwrap();
    let q = &quotes[1];

    assert_eq!(q.price, Decimal::ZERO);
    assert_eq!(q.nav, Decimal::ZERO);
    assert_eq!(q.divergence_rate, dec!(2.10));
    assert_eq!(q.apply_fee, "0.12%");
    assert_eq!(q.redeem_fee, "");
    assert_eq!(q.volume, Decimal::ZERO);
    assert_eq!(q.subscription_channel, ChannelStatus::Closed);
}

#[test]
fn test_parse_response_numeric_json_fields() {
    let quotes = JisiluClient::parse_response(&fixture()).unwrap();
    let q = &quotes[2];

    assert_eq!(q.price, dec!(0.612));
    assert_eq!(q.nav, dec!(0.6));
    assert_eq!(q.divergence_rate, dec!(-2));
    assert_eq!(q.subscription_fee, FeeRate::Fraction(dec!(0.0015)));
    assert_eq!(q.subscription_channel, ChannelStatus::LimitedLarge);
    assert_eq!(q.issuer, "");
}

#[test]
fn test_parse_response_missing_rows() {
    let body = br#"{"page": 1}"#;
    let result = JisiluClient::parse_response(body);
    assert!(matches!(result, Err(SourceError::MissingRows)));
}

#[test]
fn test_parse_response_empty_rows() {
    let body = br#"{"rows": []}"#;
    let quotes = JisiluClient::parse_response(body).unwrap();
    assert!(quotes.is_empty());
}

#[test]
fn test_parse_response_invalid_json() {
    let result = JisiluClient::parse_response(b"<html>blocked</html>");
    assert!(matches!(result, Err(SourceError::Json(_))));
}

#[test]
fn test_parse_response_row_without_cell() {
    let body = br#"{"rows": [{"id": "x"}]}"#;
    let quotes = JisiluClient::parse_response(body).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].fund_id, "");
    assert_eq!(quotes[0].subscription_fee, FeeRate::Percent(dec!(0.12)));
}

// ==================== Client configuration tests ====================

#[test]
fn test_list_url() {
    let client = JisiluClient::new(JisiluConfig::default()).unwrap();
    let url = client.list_url(1700000000000);
    assert_eq!(
        url,
        "https://www.jisilu.cn/data/lof/index_lof_list/?___jsl=LST___t%3D1700000000000&only_owned=&rp=100"
    );
}

#[test]
fn test_config_from_source_section_defaults() {
    let section = SourceConfig::default();
    let cfg = JisiluConfig::from(&section);
    assert_eq!(cfg.rows, 100);
    assert_eq!(cfg.timeout, Duration::from_secs(10));
    assert!(cfg.base_url.starts_with("https://www.jisilu.cn/"));
}

#[test]
fn test_config_from_source_section_overrides() {
    let section = SourceConfig {
        url: Some("http://localhost:8080/lof".to_string()),
        rows: Some(20),
        timeout: Duration::from_secs(3),
        user_agent: Some("test-agent".to_string()),
        referer: None,
    };
    let cfg = JisiluConfig::from(&section);
    assert_eq!(cfg.base_url, "http://localhost:8080/lof");
    assert_eq!(cfg.rows, 20);
    assert_eq!(cfg.timeout, Duration::from_secs(3));
    assert_eq!(cfg.user_agent, "test-agent");
}

#[test]
fn test_client_name() {
    let client = JisiluClient::new(JisiluConfig::default()).unwrap();
    assert_eq!(client.name(), "jisilu");
}
