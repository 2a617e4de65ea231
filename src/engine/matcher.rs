//! Batch matching engine.
//!
//! ## Pass State
//!
//! A pass walks the two priority lists with one cursor each. Alongside each
//! cursor it keeps a filled-so-far counter: the volume already taken from the
//! order under that cursor since it became the head of its side. The counter
//! resets to zero whenever its order is exhausted and the cursor moves on.
//!
//! ## Termination
//!
//! The pass stops as soon as either side runs out or the best sell no longer
//! crosses the best buy. Both lists are price-sorted, so a failed cross means
//! no later pairing can cross either.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::engine::step::{self, Fill};
use crate::error::UnknownAlgorithm;
use crate::orderbook::{sorter, BookSnapshot};
use crate::types::{MatchResult, MatchedOrder, OrderStatus, TradingPair};

// ============================================================================
// Algorithm selection
// ============================================================================

/// Matching algorithms a pass can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchAlgorithm {
    /// Price-time priority, both sides meet at the mean slipped price
    #[default]
    Fifo,
}

impl MatchAlgorithm {
    pub const FIFO_TAG: &'static str = "FIFO";

    pub fn tag(self) -> &'static str {
        match self {
            MatchAlgorithm::Fifo => Self::FIFO_TAG,
        }
    }
}

impl FromStr for MatchAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "fifo match" => Ok(MatchAlgorithm::Fifo),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Pass cursor
// ============================================================================

/// Cursor positions and per-side filled-so-far counters of a running pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassCursor {
    pub sell: usize,
    pub buy: usize,
    pub filled_sell: u64,
    pub filled_buy: u64,
}

impl PassCursor {
    /// Advance past whichever side(s) the fill exhausted and accumulate the
    /// traded volume into the side that stays.
    pub fn apply(&mut self, fill: &Fill) {
        if fill.exhaustion.sell_exhausted() {
            self.sell += 1;
            self.filled_sell = 0;
        } else {
            self.filled_sell += fill.volume;
        }

        if fill.exhaustion.buy_exhausted() {
            self.buy += 1;
            self.filled_buy = 0;
        } else {
            self.filled_buy += fill.volume;
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Runs matching passes over book snapshots.
///
/// The engine is a pure function of the snapshot it is given, apart from the
/// trade ID counter which keeps increasing across passes.
#[derive(Debug)]
pub struct MatchingEngine {
    next_trade_id: u64,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self { next_trade_id: 1 }
    }

    /// Get the next trade ID and increment the counter
    #[inline]
    fn next_trade_id(&mut self) -> u64 {
        let id = self.next_trade_id;
        self.next_trade_id += 1;
        id
    }

    /// Get the current next trade ID (without incrementing)
    #[inline]
    pub fn peek_next_trade_id(&self) -> u64 {
        self.next_trade_id
    }

    /// Run one pass of `algorithm` over `snapshot`.
    pub fn run(
        &mut self,
        algorithm: MatchAlgorithm,
        pass_id: u64,
        pair: TradingPair,
        snapshot: BookSnapshot,
    ) -> MatchResult {
        match algorithm {
            MatchAlgorithm::Fifo => self.run_fifo(pass_id, pair, snapshot),
        }
    }

    fn run_fifo(&mut self, pass_id: u64, pair: TradingPair, snapshot: BookSnapshot) -> MatchResult {
        let BookSnapshot {
            mut sell_orders,
            mut buy_orders,
        } = snapshot;

        let sell_priority = sorter::sell_priority(&sell_orders);
        let buy_priority = sorter::buy_priority(&buy_orders);

        let mut result = MatchResult::new(pass_id, pair);
        let mut cursor = PassCursor::default();

        loop {
            let sell = sell_priority.get(cursor.sell).map(|&i| &sell_orders[i]);
            let buy = buy_priority.get(cursor.buy).map(|&i| &buy_orders[i]);

            let Some(fill) = step::match_orders(sell, buy, cursor.filled_sell, cursor.filled_buy)
            else {
                if let (Some(sell), Some(buy)) = (sell, buy) {
                    debug!(
                        "pass {}: best ask {} above best bid {}, stopping",
                        pass_id, sell.slipped_price, buy.slipped_price
                    );
                }
                break;
            };

            let si = sell_priority[cursor.sell];
            let bi = buy_priority[cursor.buy];

            if fill.volume > 0 {
                let trade = MatchedOrder::new(
                    self.next_trade_id(),
                    &sell_orders[si],
                    &buy_orders[bi],
                    fill.price,
                    fill.volume,
                );
                debug!(
                    "pass {}: {} @ {} ask[{}] -> bid[{}] ({})",
                    pass_id,
                    trade.volume,
                    trade.price,
                    trade.sell_index,
                    trade.buy_index,
                    fill.exhaustion
                );
                result.record(trade);

                sell_orders[si].record_fill(fill.volume);
                buy_orders[bi].record_fill(fill.volume);
            }

            // A zero-volume fill only retires the empty order(s); the
            // counterparty is left as it was.
            if fill.exhaustion.sell_exhausted() {
                sell_orders[si].advance_status(OrderStatus::FullyFilled);
            } else if fill.volume > 0 {
                sell_orders[si].advance_status(OrderStatus::PartiallyFilled);
            }
            if fill.exhaustion.buy_exhausted() {
                buy_orders[bi].advance_status(OrderStatus::FullyFilled);
            } else if fill.volume > 0 {
                buy_orders[bi].advance_status(OrderStatus::PartiallyFilled);
            }

            cursor.apply(&fill);
        }

        info!(
            "pass {}: {} sells, {} buys -> {}",
            pass_id,
            sell_orders.len(),
            buy_orders.len(),
            result
        );

        result.attach_orders(sell_orders, buy_orders);
        result
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
