//! Error types for the batch matcher.
//!
//! Only order construction, actor registration, configuration loading and
//! receipt encoding can fail. Everything that happens inside a matching pass
//! (no crossing price, an exhausted side) is a normal outcome, not an error.

use thiserror::Error;

/// Rejections raised while constructing an order.
///
/// A rejected order never enters the book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order type can only be buy or sell, got {0:?}")]
    InvalidOrderType(String),

    #[error("slipped price cannot be negative: {0}")]
    NegativeSlippage(i64),

    #[error("volume cannot be negative: {0}")]
    NegativeVolume(i64),

    #[error("price cannot be negative: {0}")]
    NegativePrice(i64),

    #[error("price {0} is out of range after applying slippage")]
    PriceOutOfRange(i64),
}

/// Errors surfaced by [`crate::Exchange`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("actor {0} already exists")]
    DuplicateActor(u64),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Tag that names no known matching algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown matching algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

/// Errors raised while loading an [`crate::ExchangeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("slippage tolerance must be in [0, 1), got {0}")]
    InvalidSlippage(rust_decimal::Decimal),

    #[error("{0} label cannot be empty")]
    EmptyLabel(&'static str),

    #[error("resting capacity {0} exceeds the per-side maximum")]
    InvalidCapacity(usize),
}

/// Errors raised while building a [`crate::PassReceipt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    #[error("failed to encode trade {trade_id}: {reason}")]
    Encoding { trade_id: u64, reason: String },
}

pub type OrderResult<T> = std::result::Result<T, OrderError>;
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;
