//! One side of the resting order book.
//!
//! ## Arena
//!
//! Orders live in an append-only `Slab`. Nothing is removed between passes,
//! so slab keys are handed out as 0, 1, 2, ... and double as the resting index
//! of each order. The whole arena is taken at the start of a pass.
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Without removals, `insert` returns `len()` as the new key
//! - Iterating an owned slab yields `(key, value)` in key order

use std::collections::HashMap;

use slab::Slab;

use crate::types::{Order, Side};

/// Resting orders on one side of the book.
#[derive(Debug)]
pub struct RestingSide {
    side: Side,

    /// Append-only order storage, key == resting index
    orders: Slab<Order>,

    /// Order ID to slab key mapping
    order_index: HashMap<u64, usize>,

    /// Slots pre-allocated after every pass
    capacity: usize,
}

impl RestingSide {
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            orders: Slab::with_capacity(capacity),
            order_index: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of resting orders on this side
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting index the next submitted order will receive
    #[inline]
    pub fn next_resting_index(&self) -> u64 {
        self.orders.len() as u64
    }

    /// Append an order to this side.
    ///
    /// The arena assigns the resting index: whatever the order carried is
    /// overwritten with its slab key. Returns that key.
    pub fn push(&mut self, mut order: Order) -> usize {
        debug_assert_eq!(order.side(), self.side, "order pushed onto the wrong side");

        let entry = self.orders.vacant_entry();
        let key = entry.key();
        order.resting_index = key as u64;
        self.order_index.insert(order.id, key);
        entry.insert(order);
        key
    }

    /// Look up a resting order by ID
    pub fn get(&self, order_id: u64) -> Option<&Order> {
        let key = *self.order_index.get(&order_id)?;
        self.orders.get(key)
    }

    /// Move every order out into a dense sequence indexed by resting index.
    ///
    /// Leaves this side empty with its capacity restored.
    pub fn take(&mut self) -> Vec<Order> {
        let orders = std::mem::replace(&mut self.orders, Slab::with_capacity(self.capacity));
        self.order_index.clear();

        orders.into_iter().map(|(_, order)| order).collect()
    }

    /// Drop every order on this side
    pub fn clear(&mut self) {
        self.orders.clear();
        self.order_index.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
