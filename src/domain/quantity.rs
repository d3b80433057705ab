//! Trade size in fund shares.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Share count used when none is configured.
pub const DEFAULT_QUANTITY: u32 = 10_000;

/// Returned when a zero share count is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("quantity must be greater than zero")]
pub struct InvalidQuantity;

/// Quantity is a positive number of fund shares per trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub fn new(shares: u32) -> Result<Self, InvalidQuantity> {
        NonZeroU32::new(shares).map(Quantity).ok_or(InvalidQuantity)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0.get())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity(NonZeroU32::new(DEFAULT_QUANTITY).unwrap_or(NonZeroU32::MIN))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = InvalidQuantity;

    fn try_from(shares: u32) -> Result<Self, Self::Error> {
        Quantity::new(shares)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.get()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
