//! Core data types for the batch matcher.
//!
//! ## Types
//!
//! - [`Order`]: A resting order with fill status
//! - [`Side`]: Buy or Sell
//! - [`OrderStatus`]: Resting, PartiallyFilled, FullyFilled
//! - [`MatchedOrder`]: A trade between one sell and one buy order
//! - [`MatchResult`]: Trades of a pass plus aggregate statistics
//! - [`PassReceipt`]: Pass summary with a deterministic state root
//! - [`Actor`]: Account owning orders
//! - [`TradingPair`]: Asset/base labels
//!
//! All prices and volumes are integers in the smallest unit.

mod actor;
mod order;
mod pair;
mod receipt;
mod result;
mod trade;
pub mod price;

// Re-export all types at module level
pub use actor::Actor;
pub use order::{Order, OrderStatus, Side};
pub use pair::TradingPair;
pub use receipt::PassReceipt;
pub use result::MatchResult;
pub use trade::MatchedOrder;
