//! Domain models for fund arbitrage.

mod account;
mod fees;
mod mode;
mod quantity;
mod quote;
mod result;

pub use account::AccountCostModel;
pub use fees::{DEFAULT_FEE_RATE, FeeRate, parse_fee_rate};
pub use mode::{ArbitrageMode, RankMetric};
pub use quantity::{DEFAULT_QUANTITY, InvalidQuantity, Quantity};
pub use quote::{ChannelStatus, FundQuote};
pub use result::ArbitrageResult;
