//! A single pairing of the best sell against the best buy.

use std::fmt;

use crate::types::price::midpoint;
use crate::types::Order;

/// Which side(s) of a pairing had their remaining volume consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exhaustion {
    SellOrderExhausted,
    BuyOrderExhausted,
    BothOrdersExhausted,
}

impl Exhaustion {
    #[inline]
    pub fn sell_exhausted(self) -> bool {
        matches!(self, Exhaustion::SellOrderExhausted | Exhaustion::BothOrdersExhausted)
    }

    #[inline]
    pub fn buy_exhausted(self) -> bool {
        matches!(self, Exhaustion::BuyOrderExhausted | Exhaustion::BothOrdersExhausted)
    }
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Exhaustion::SellOrderExhausted => "Sell Order Exhausted",
            Exhaustion::BuyOrderExhausted => "Buy Order Exhausted",
            Exhaustion::BothOrdersExhausted => "Both Orders Exhausted",
        };
        f.write_str(s)
    }
}

/// Price, volume and exhaustion outcome of one pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub price: u64,
    pub volume: u64,
    pub exhaustion: Exhaustion,
}

/// Pair a sell order with a buy order.
///
/// `filled_sell` and `filled_buy` are the volumes already consumed from each
/// order since it became the head of its side.
///
/// Returns `None` when either order is missing or the sell's slipped price is
/// above the buy's: no trade is possible at the current best prices.
pub fn match_orders(
    sell: Option<&Order>,
    buy: Option<&Order>,
    filled_sell: u64,
    filled_buy: u64,
) -> Option<Fill> {
    let (sell, buy) = (sell?, buy?);

    if sell.slipped_price > buy.slipped_price {
        return None;
    }

    let price = midpoint(sell.slipped_price, buy.slipped_price);
    let sell_remaining = sell.volume.saturating_sub(filled_sell);
    let buy_remaining = buy.volume.saturating_sub(filled_buy);

    let (volume, exhaustion) = match buy_remaining.cmp(&sell_remaining) {
        std::cmp::Ordering::Equal => (buy_remaining, Exhaustion::BothOrdersExhausted),
        std::cmp::Ordering::Greater => (sell_remaining, Exhaustion::SellOrderExhausted),
        std::cmp::Ordering::Less => (buy_remaining, Exhaustion::BuyOrderExhausted),
    };

    Some(Fill {
        price,
        volume,
        exhaustion,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
