//! Lenient conversion of provider JSON fields.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

/// Converts a JSON field to a decimal, falling back to zero.
///
/// Accepts numbers and strings such as `"1.234"`, `"-3.21%"` or `"1,024.5"`.
/// Missing fields, `null`, `"-"` and anything unparsable become zero.
pub fn coerce_decimal(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::Number(n)) => number_to_decimal(n).unwrap_or(Decimal::ZERO),
        Some(Value::String(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| *c != '%' && *c != ',')
                .collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() || cleaned == "-" {
                return Decimal::ZERO;
            }
            Decimal::from_str(cleaned).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

/// Converts a JSON field to a string, using `default` when missing or null.
pub fn coerce_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

fn number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    // Go through the textual form so 1.05 stays 1.05.
    Decimal::from_str(&n.to_string())
        .ok()
        .or_else(|| n.as_f64().and_then(Decimal::from_f64))
}
