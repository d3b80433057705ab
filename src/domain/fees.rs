//! Subscription fee rates.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fraction used when a fee field cannot be parsed (0.12%).
pub const DEFAULT_FEE_RATE: Decimal = dec!(0.0012);

/// FeeRate is a fee field classified by the form it was published in.
///
/// Upstream data mixes `"0.12%"` and `"0.0012"` for the same rate, so the
/// form is detected once at ingestion and the calculator only ever asks for
/// [`FeeRate::fraction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "value", rename_all = "snake_case")]
pub enum FeeRate {
    /// Percentage form, holds the number in front of the `%` (e.g. 0.12).
    Percent(Decimal),
    /// Fractional form, already dimensionless (e.g. 0.0012).
    Fraction(Decimal),
    /// Field was empty or not a number.
    #[default]
    Unparsed,
}

impl FeeRate {
    /// Classifies a raw fee field. Never fails: unreadable input becomes
    /// [`FeeRate::Unparsed`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.contains('%') {
            let number = trimmed.replace('%', "");
            match parse_number(number.trim()) {
                Some(value) => FeeRate::Percent(value),
                None => FeeRate::Unparsed,
            }
        } else {
            match parse_number(trimmed) {
                Some(value) => FeeRate::Fraction(value),
                None => FeeRate::Unparsed,
            }
        }
    }

    /// Returns the dimensionless rate.
    pub fn fraction(&self) -> Decimal {
        match self {
            FeeRate::Percent(value) => *value / dec!(100),
            FeeRate::Fraction(value) => *value,
            FeeRate::Unparsed => DEFAULT_FEE_RATE,
        }
    }

    /// Returns true if the default rate stands in for an unreadable field.
    pub fn is_default(&self) -> bool {
        matches!(self, FeeRate::Unparsed)
    }
}

/// Parses a raw fee field straight into a dimensionless fraction.
pub fn parse_fee_rate(raw: &str) -> Decimal {
    FeeRate::parse(raw).fraction()
}

fn parse_number(s: &str) -> Option<Decimal> {
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
