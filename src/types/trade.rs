//! Matched order (trade) produced by one step of a matching pass.
//!
//! ## SSZ Serialization
//!
//! Trades are serialized using SSZ for deterministic encoding. The pass
//! receipt hashes the encoded trades into its state root.

use ssz_rs::prelude::*;

use crate::types::Order;

/// A single fill between one sell order and one buy order.
///
/// ## Order References
///
/// `sell_index` and `buy_index` point into the pass arena held by the
/// [`MatchResult`](crate::types::MatchResult) that owns this trade. Resolve
/// them with [`MatchResult::sell_order`](crate::types::MatchResult::sell_order)
/// and [`MatchResult::buy_order`](crate::types::MatchResult::buy_order).
///
/// ## Price Discovery
///
/// Both sides meet halfway: the agreed price is the truncated mean of the
/// two slipped prices.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchedOrder {
    /// Unique trade identifier (assigned by the engine)
    pub id: u64,

    pub sell_order_id: u64,
    pub buy_order_id: u64,

    /// Arena index of the sell order (its resting index)
    pub sell_index: u64,

    /// Arena index of the buy order (its resting index)
    pub buy_index: u64,

    pub seller_id: u64,
    pub buyer_id: u64,

    /// Agreed price
    pub price: u64,

    /// Agreed (filled) volume, always > 0
    pub volume: u64,
}

impl MatchedOrder {
    /// Create a trade between two orders.
    pub fn new(id: u64, sell: &Order, buy: &Order, price: u64, volume: u64) -> Self {
        Self {
            id,
            sell_order_id: sell.id,
            buy_order_id: buy.id,
            sell_index: sell.resting_index,
            buy_index: buy.resting_index,
            seller_id: sell.actor_id,
            buyer_id: buy.actor_id,
            price,
            volume,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Side, TradingPair};

    fn trade() -> MatchedOrder {
        let sell = Order::new(10, 1, Side::Sell, 100, 10, 100, TradingPair::default(), 0).unwrap();
        let buy = Order::new(11, 2, Side::Buy, 110, 4, 110, TradingPair::default(), 3).unwrap();
        MatchedOrder::new(1, &sell, &buy, 105, 4)
    }

    #[test]
    fn test_matched_order_new() {
        let trade = trade();

        assert_eq!(trade.id, 1);
        assert_eq!(trade.sell_order_id, 10);
        assert_eq!(trade.buy_order_id, 11);
        assert_eq!(trade.sell_index, 0);
        assert_eq!(trade.buy_index, 3);
        assert_eq!(trade.seller_id, 1);
        assert_eq!(trade.buyer_id, 2);
        assert_eq!(trade.price, 105);
        assert_eq!(trade.volume, 4);
    }

    #[test]
    fn test_matched_order_ssz_size() {
        let bytes = ssz_rs::serialize(&trade()).expect("Failed to serialize");

        // 9 fields * 8 bytes
        assert_eq!(bytes.len(), 72, "MatchedOrder should serialize to 72 bytes");
    }

    #[test]
    fn test_matched_order_deterministic_serialization() {
        let bytes1 = ssz_rs::serialize(&trade()).expect("Failed to serialize");
        let bytes2 = ssz_rs::serialize(&trade()).expect("Failed to serialize");

        assert_eq!(bytes1, bytes2, "SSZ serialization must be deterministic");
    }
}
