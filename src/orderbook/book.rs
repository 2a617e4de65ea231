//! Two-sided resting order book.
//!
//! Orders accumulate between passes and are taken out wholesale when a pass
//! starts. Nothing survives into the next batch.

use crate::orderbook::RestingSide;
use crate::types::{Order, Side};

/// Dense per-side sequences handed to the matching engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSnapshot {
    pub sell_orders: Vec<Order>,
    pub buy_orders: Vec<Order>,
}

/// Resting buy and sell orders for a single trading pair.
#[derive(Debug)]
pub struct OrderBook {
    sells: RestingSide,
    buys: RestingSide,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a book with `capacity` slots pre-allocated per side
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sells: RestingSide::with_capacity(Side::Sell, capacity),
            buys: RestingSide::with_capacity(Side::Buy, capacity),
        }
    }

    #[inline]
    pub fn side(&self, side: Side) -> &RestingSide {
        match side {
            Side::Sell => &self.sells,
            Side::Buy => &self.buys,
        }
    }

    #[inline]
    pub fn side_mut(&mut self, side: Side) -> &mut RestingSide {
        match side {
            Side::Sell => &mut self.sells,
            Side::Buy => &mut self.buys,
        }
    }

    /// Resting index the next order on `side` will receive
    #[inline]
    pub fn next_resting_index(&self, side: Side) -> u64 {
        self.side(side).next_resting_index()
    }

    /// Append an order to its side. The side assigns and returns its resting
    /// index.
    pub fn add_order(&mut self, order: Order) -> usize {
        self.side_mut(order.side()).push(order)
    }

    #[inline]
    pub fn sell_count(&self) -> usize {
        self.sells.len()
    }

    #[inline]
    pub fn buy_count(&self) -> usize {
        self.buys.len()
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.sell_count() + self.buy_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sells.is_empty() && self.buys.is_empty()
    }

    /// Find a resting order on either side
    pub fn get_order(&self, order_id: u64) -> Option<&Order> {
        self.sells.get(order_id).or_else(|| self.buys.get(order_id))
    }

    /// Take every resting order out of the book, leaving it empty.
    pub fn take_snapshot(&mut self) -> BookSnapshot {
        BookSnapshot {
            sell_orders: self.sells.take(),
            buy_orders: self.buys.take(),
        }
    }

    /// Clear all orders from the book
    pub fn clear(&mut self) {
        self.sells.clear();
        self.buys.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
