//! Exchange: actors, order submission and matching passes for one pair.
//!
//! ## Pass Boundary
//!
//! [`Exchange::run_match_pass`] takes every resting order out of the book
//! before matching. Whatever the outcome, the book is empty afterwards and
//! unmatched orders are gone. There is no carry-over between passes.
//!
//! ## Exclusivity
//!
//! Submission and matching both take `&mut self`, so they can never overlap.
//! Share an exchange across threads behind a single lock.

use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::config::{ExchangeConfig, MAX_RESTING_CAPACITY};
use crate::engine::{MatchAlgorithm, MatchingEngine};
use crate::error::{ExchangeError, ExchangeResult};
use crate::orderbook::OrderBook;
use crate::types::price::slipped_price;
use crate::types::{Actor, MatchResult, Order, Side, TradingPair};

/// Single-pair batch exchange.
///
/// ## Example
///
/// ```
/// use batch_matcher::{Exchange, ExchangeConfig};
/// use rust_decimal::Decimal;
///
/// let config = ExchangeConfig::for_pair("BMB", "mUSDT").with_slippage_tolerance(Decimal::ZERO);
/// let mut exchange = Exchange::new(config);
///
/// let seller = exchange.add_actor(1000, 1000);
/// let buyer = exchange.add_actor(1000, 1000);
///
/// exchange.ask_order(seller, 10, 100).unwrap();
/// exchange.bid_order(buyer, 4, 110).unwrap();
/// exchange.bid_order(buyer, 6, 105).unwrap();
///
/// let result = exchange.run_match_pass("FIFO");
/// assert_eq!(result.trade_count(), 2);
/// assert_eq!(result.total_volume, 10);
/// assert_eq!(exchange.resting_order_count(), 0);
/// ```
#[derive(Debug)]
pub struct Exchange {
    pair: TradingPair,
    slippage_tolerance: Decimal,
    actors: HashMap<u64, Actor>,
    book: OrderBook,
    engine: MatchingEngine,
    next_actor_id: u64,
    next_order_id: u64,
    passes_run: u64,
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new(ExchangeConfig::default())
    }
}

impl Exchange {
    /// Create an exchange from a configuration.
    ///
    /// Use [`ExchangeConfig::validate`] on externally supplied values first.
    /// The pre-allocation is capped at [`MAX_RESTING_CAPACITY`] either way.
    pub fn new(config: ExchangeConfig) -> Self {
        Self {
            pair: config.pair(),
            slippage_tolerance: config.slippage_tolerance,
            actors: HashMap::new(),
            book: OrderBook::with_capacity(config.resting_capacity.min(MAX_RESTING_CAPACITY)),
            engine: MatchingEngine::new(),
            next_actor_id: 1,
            next_order_id: 1,
            passes_run: 0,
        }
    }

    /// Exchange for `asset`/`base` with default settings
    pub fn with_pair(asset: impl Into<String>, base: impl Into<String>) -> Self {
        Self::new(ExchangeConfig::for_pair(asset, base))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    #[inline]
    pub fn slippage_tolerance(&self) -> Decimal {
        self.slippage_tolerance
    }

    #[inline]
    pub fn resting_buy_count(&self) -> usize {
        self.book.buy_count()
    }

    #[inline]
    pub fn resting_sell_count(&self) -> usize {
        self.book.sell_count()
    }

    #[inline]
    pub fn resting_order_count(&self) -> usize {
        self.book.order_count()
    }

    /// Look up a resting order by ID
    pub fn order(&self, order_id: u64) -> Option<&Order> {
        self.book.get_order(order_id)
    }

    /// Read-only view of the resting book
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn actor(&self, actor_id: u64) -> Option<&Actor> {
        self.actors.get(&actor_id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of matching passes run so far
    #[inline]
    pub fn passes_run(&self) -> u64 {
        self.passes_run
    }

    // ========================================================================
    // Actors
    // ========================================================================

    /// Register a new actor with an exchange-assigned ID.
    pub fn add_actor(&mut self, asset_volume: u64, base_volume: u64) -> u64 {
        while self.actors.contains_key(&self.next_actor_id) {
            self.next_actor_id += 1;
        }
        let id = self.next_actor_id;
        self.next_actor_id += 1;
        self.actors.insert(id, Actor::new(id, asset_volume, base_volume));
        id
    }

    /// Register an actor with a caller-chosen ID.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::DuplicateActor`] if the ID is already taken.
    pub fn register_actor(&mut self, actor: Actor) -> ExchangeResult<u64> {
        if self.actors.contains_key(&actor.id) {
            return Err(ExchangeError::DuplicateActor(actor.id));
        }
        let id = actor.id;
        self.actors.insert(id, actor);
        Ok(id)
    }

    // ========================================================================
    // Order submission
    // ========================================================================

    /// Validate an order and append it to its side of the book.
    ///
    /// The order receives the next resting index on its side and a slipped
    /// price derived from the configured tolerance.
    ///
    /// # Errors
    ///
    /// Any [`crate::OrderError`]; a rejected order leaves the book untouched.
    pub fn submit_order(
        &mut self,
        actor_id: u64,
        side: Side,
        volume: i64,
        price: i64,
    ) -> ExchangeResult<u64> {
        let result = match slipped_price(side, price, self.slippage_tolerance) {
            Ok(slipped) => Order::new(
                self.next_order_id,
                actor_id,
                side,
                price,
                volume,
                slipped,
                self.pair.clone(),
                self.book.next_resting_index(side),
            ),
            // An unrepresentable slipped price ranks after the sign checks
            Err(e) => Order::check_quote(volume, price).and(Err(e)),
        };

        let order = match result {
            Ok(order) => order,
            Err(e) => {
                warn!("rejected {:?} order from actor {}: {}", side, actor_id, e);
                return Err(e.into());
            }
        };

        let order_id = order.id;
        self.next_order_id += 1;
        debug!("resting {}", order);
        self.book.add_order(order);

        Ok(order_id)
    }

    /// Submit a buy order
    pub fn bid_order(&mut self, actor_id: u64, volume: i64, price: i64) -> ExchangeResult<u64> {
        self.submit_order(actor_id, Side::Buy, volume, price)
    }

    /// Submit a sell order
    pub fn ask_order(&mut self, actor_id: u64, volume: i64, price: i64) -> ExchangeResult<u64> {
        self.submit_order(actor_id, Side::Sell, volume, price)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Run a matching pass selected by tag.
    ///
    /// Unknown tags produce an empty result. The book is cleared either way.
    pub fn run_match_pass(&mut self, algorithm: &str) -> MatchResult {
        match algorithm.parse::<MatchAlgorithm>() {
            Ok(algorithm) => self.run_pass(algorithm),
            Err(e) => {
                warn!("{}, discarding {} resting orders", e, self.book.order_count());
                self.passes_run += 1;
                self.book.clear();
                MatchResult::new(self.passes_run, self.pair.clone())
            }
        }
    }

    /// Run a matching pass with a known algorithm.
    pub fn run_pass(&mut self, algorithm: MatchAlgorithm) -> MatchResult {
        self.passes_run += 1;
        let snapshot = self.book.take_snapshot();
        self.engine.run(algorithm, self.passes_run, self.pair.clone(), snapshot)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
