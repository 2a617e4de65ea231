//! Price-time priority ordering of one side of a pass snapshot.
//!
//! The sorter never moves orders. It returns a list of indices into the dense
//! snapshot, best order first:
//!
//! - **Sell**: lowest slipped price first
//! - **Buy**: highest slipped price first
//!
//! Equal slipped prices fall back to the resting index, so the earlier
//! submission keeps priority.

use std::cmp::Ordering;

use crate::types::{Order, Side};

/// Priority comparison between two orders on the same side.
pub fn compare(side: Side, a: &Order, b: &Order) -> Ordering {
    let by_price = match side {
        Side::Sell => a.slipped_price.cmp(&b.slipped_price),
        Side::Buy => b.slipped_price.cmp(&a.slipped_price),
    };
    by_price.then_with(|| a.resting_index.cmp(&b.resting_index))
}

/// Indices of `orders` in matching priority for `side`.
pub fn priority(side: Side, orders: &[Order]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..orders.len()).collect();
    indices.sort_by(|&a, &b| compare(side, &orders[a], &orders[b]));
    indices
}

#[inline]
pub fn sell_priority(orders: &[Order]) -> Vec<usize> {
    priority(Side::Sell, orders)
}

#[inline]
pub fn buy_priority(orders: &[Order]) -> Vec<usize> {
    priority(Side::Buy, orders)
}

// ============================================================================
// Unit Tests
// ============================================================================
