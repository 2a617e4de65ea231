//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same snapshot always produces the same trades
//! 2. **Integer Prices**: No floating-point operations
//! 3. **Synchronous Execution**: A pass never suspends or yields
//! 4. **Price-Time Priority**: Best price first, then FIFO
//!
//! ## Matching Rules
//!
//! - The best sell is paired with the best buy while the sell's slipped price
//!   is at or below the buy's
//! - Both sides meet at the truncated mean of their slipped prices
//! - Partial fills are tracked within the pass only
//! - Unmatched volume is discarded when the pass ends
//!
//! ## Example
//!
//! ```
//! use batch_matcher::engine::{MatchAlgorithm, MatchingEngine};
//! use batch_matcher::orderbook::BookSnapshot;
//! use batch_matcher::types::{Order, Side, TradingPair};
//!
//! let sell = Order::new(1, 10, Side::Sell, 100, 10, 100, TradingPair::default(), 0).unwrap();
//! let buy = Order::new(2, 20, Side::Buy, 110, 4, 110, TradingPair::default(), 0).unwrap();
//! let snapshot = BookSnapshot { sell_orders: vec![sell], buy_orders: vec![buy] };
//!
//! let mut engine = MatchingEngine::new();
//! let result = engine.run(MatchAlgorithm::Fifo, 1, TradingPair::default(), snapshot);
//!
//! assert_eq!(result.trade_count(), 1);
//! assert_eq!(result.total_volume, 4);
//! ```

pub mod matcher;
pub mod step;

pub use matcher::{MatchAlgorithm, MatchingEngine, PassCursor};
pub use step::{match_orders, Exhaustion, Fill};
