//! Serde helper for human-readable durations such as "500ms", "10s" or "2m".

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{self, Deserialize, Deserializer};

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) => parse_duration(&s).map_err(serde::de::Error::custom),
        None => Ok(Duration::ZERO),
    }
}

/// Parses `<number><unit>`; a bare number is read as seconds.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Duration::ZERO);
    }

    let split = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let value =
        Decimal::from_str(number).map_err(|_| format!("invalid duration number: {}", number))?;

    let millis_per_unit = match unit.trim() {
        "ms" => Decimal::ONE,
        "s" | "" => Decimal::from(1_000),
        "m" => Decimal::from(60_000),
        "h" => Decimal::from(3_600_000),
        other => return Err(format!("unknown duration unit: {}", other)),
    };

    let millis = value
        .checked_mul(millis_per_unit)
        .and_then(|ms| ms.round().to_u64())
        .ok_or_else(|| format!("duration out of range: {}", s))?;

    Ok(Duration::from_millis(millis))
}
