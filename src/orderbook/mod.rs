//! Resting order book.
//!
//! ## Architecture
//!
//! - **Append-only arenas**: one `Slab` per side, keys equal resting indices
//! - **Snapshot and clear**: a matching pass takes both sides wholesale
//! - **Price-time priority**: the sorter orders each side by slipped price,
//!   then by resting index
//!
//! ## Components
//!
//! - [`RestingSide`]: Arena of resting orders for one side
//! - [`OrderBook`]: Buy and sell sides of a single trading pair
//! - [`sorter`]: Priority lists for a pass snapshot
//!
//! ## Example
//!
//! ```
//! use batch_matcher::orderbook::{sorter, OrderBook};
//! use batch_matcher::types::{Order, Side, TradingPair};
//!
//! let mut book = OrderBook::with_capacity(16);
//! for (id, price) in [(1, 105), (2, 101)] {
//!     let index = book.next_resting_index(Side::Sell);
//!     let pair = TradingPair::default();
//!     let order = Order::new(id, 1, Side::Sell, price, 1, price, pair, index).unwrap();
//!     book.add_order(order);
//! }
//!
//! let snapshot = book.take_snapshot();
//! assert!(book.is_empty());
//! assert_eq!(sorter::sell_priority(&snapshot.sell_orders), vec![1, 0]);
//! ```

pub mod book;
pub mod side;
pub mod sorter;

pub use book::{BookSnapshot, OrderBook};
pub use side::RestingSide;
