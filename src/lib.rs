//! # Batch Matcher
//!
//! Two-sided order book for a single asset/base pair, matched in discrete
//! batch passes.
//!
//! ## Architecture
//!
//! - **Types**: Orders, trades, pass results and receipts
//! - **OrderBook**: Append-only slab arenas, one per side
//! - **Engine**: Price-time priority pass over a book snapshot
//! - **Exchange**: Actors, order submission and the pass boundary
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical batches produce identical trades
//! 2. **No Floating Point**: Slippage uses `rust_decimal`, prices are integers
//! 3. **Batch Semantics**: Every pass starts from the orders submitted since
//!    the last one and leaves an empty book behind
//! 4. **Synchronous Execution**: No async, no locks in the matching path

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, MatchedOrder, MatchResult, PassReceipt
pub mod types;

/// Order book: per-side arenas and the priority sorter
pub mod orderbook;

/// Matching engine: the FIFO pass state machine
pub mod engine;

pub mod config;
pub mod error;
pub mod exchange;
pub mod scenario;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::ExchangeConfig;
pub use engine::{MatchAlgorithm, MatchingEngine};
pub use error::{ConfigError, ExchangeError, OrderError, ReceiptError};
pub use exchange::Exchange;
pub use orderbook::{BookSnapshot, OrderBook};
pub use scenario::Scenario;
pub use types::{
    Actor, MatchResult, MatchedOrder, Order, OrderStatus, PassReceipt, Side, TradingPair,
};
