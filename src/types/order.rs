//! Order types for the batch matcher.
//!
//! ## Validation
//!
//! Orders are built from signed inputs and validated once, at construction.
//! A constructed [`Order`] always carries non-negative economic terms, so the
//! rest of the crate works with unsigned integers.
//!
//! ## Status
//!
//! Status only moves forward: `Resting -> PartiallyFilled -> FullyFilled`.

use std::fmt;
use std::str::FromStr;

use crate::error::{OrderError, OrderResult};
use crate::types::TradingPair;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Represented as u8 on the wire:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Book label used when rendering orders
    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "BID",
            Side::Sell => "ASK",
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = OrderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Side::from_u8(value).ok_or_else(|| OrderError::InvalidOrderType(value.to_string()))
    }
}

impl FromStr for Side {
    type Err = OrderError;

    /// Accepts `buy`/`bid` and `sell`/`ask`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "bid" | "buy order" => Ok(Side::Buy),
            "sell" | "ask" | "sell order" => Ok(Side::Sell),
            _ => Err(OrderError::InvalidOrderType(s.to_string())),
        }
    }
}

// ============================================================================
// OrderStatus enum
// ============================================================================

/// Fill status of an order within a matching pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Resting,
    PartiallyFilled,
    FullyFilled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Resting => "resting",
            OrderStatus::PartiallyFilled => "partial",
            OrderStatus::FullyFilled => "filled",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// `slipped_price` is the price the matcher compares and averages; `price` is
/// kept for display and bookkeeping only.
///
/// ## Example
///
/// ```
/// use batch_matcher::types::{Order, OrderStatus, Side, TradingPair};
///
/// let order = Order::new(1, 7, Side::Sell, 1000, 6, 1010, TradingPair::default(), 0).unwrap();
/// assert_eq!(order.status(), OrderStatus::Resting);
/// assert_eq!(order.remaining(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier (assigned by the exchange)
    pub id: u64,

    /// Owning actor
    pub actor_id: u64,

    side: Side,

    /// Quoted price in the smallest price unit
    pub price: u64,

    /// Volume in the smallest quantity unit
    pub volume: u64,

    /// Effective price after slippage
    pub slipped_price: u64,

    /// Position on its side of the book, assigned by the book on insertion
    pub resting_index: u64,

    /// Labels of the book this order was submitted to
    pub pair: TradingPair,

    status: OrderStatus,

    filled: u64,
}

impl Order {
    /// Create a new resting order.
    ///
    /// # Errors
    ///
    /// * [`OrderError::NegativeSlippage`] if `slipped_price < 0`
    /// * [`OrderError::NegativeVolume`] if `volume < 0`
    /// * [`OrderError::NegativePrice`] if `price < 0`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        actor_id: u64,
        side: Side,
        price: i64,
        volume: i64,
        slipped_price: i64,
        pair: TradingPair,
        resting_index: u64,
    ) -> OrderResult<Self> {
        if slipped_price < 0 {
            return Err(OrderError::NegativeSlippage(slipped_price));
        }
        Self::check_quote(volume, price)?;

        Ok(Self {
            id,
            actor_id,
            side,
            price: price as u64,
            volume: volume as u64,
            slipped_price: slipped_price as u64,
            resting_index,
            pair,
            status: OrderStatus::Resting,
            filled: 0,
        })
    }

    /// Reject a negative volume, then a negative price.
    pub(crate) fn check_quote(volume: i64, price: i64) -> OrderResult<()> {
        if volume < 0 {
            return Err(OrderError::NegativeVolume(volume));
        }
        if price < 0 {
            return Err(OrderError::NegativePrice(price));
        }
        Ok(())
    }

    /// Get the order side
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Volume consumed by trades so far
    #[inline]
    pub fn filled(&self) -> u64 {
        self.filled
    }

    /// Volume not yet consumed
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.volume.saturating_sub(self.filled)
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::FullyFilled
    }

    /// Move the status forward. Requests to move backwards are ignored.
    pub(crate) fn advance_status(&mut self, status: OrderStatus) {
        if status > self.status {
            self.status = status;
        }
    }

    /// Book a fill against this order, capped at the remaining volume.
    ///
    /// Returns the volume actually booked.
    pub(crate) fn record_fill(&mut self, volume: u64) -> u64 {
        let actual = volume.min(self.remaining());
        self.filled += actual;
        actual
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slip = self.slipped_price as i128 - self.price as i128;
        write!(
            f,
            "{}[{}] {} {} @ {}{:+} {} ({})",
            self.side.label(),
            self.resting_index,
            self.volume,
            self.pair.asset,
            self.price,
            slip,
            self.pair.base,
            self.status,
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
