//! Slippage pricing.
//!
//! ## Overview
//!
//! Every order carries an effective ("slipped") price derived from its quoted
//! price and a fixed slippage tolerance. The matcher compares and averages the
//! slipped prices, never the quoted ones.
//!
//! - **Sell (ask)**: `price * (1 + tolerance)`
//! - **Buy (bid)**: `price * (1 - tolerance)`
//!
//! The product is truncated toward zero into integer price units.
//!
//! ## Why Decimal?
//!
//! Floating-point products such as `1000 * 0.99` can land a hair below the
//! exact value and truncate to the wrong unit. `rust_decimal` keeps the
//! multiplication exact.
//!
//! ## Examples
//!
//! ```
//! use batch_matcher::types::price::{slipped_price, DEFAULT_SLIPPAGE_TOLERANCE};
//! use batch_matcher::types::Side;
//!
//! assert_eq!(slipped_price(Side::Sell, 1000, DEFAULT_SLIPPAGE_TOLERANCE), Ok(1010));
//! assert_eq!(slipped_price(Side::Buy, 1000, DEFAULT_SLIPPAGE_TOLERANCE), Ok(990));
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{OrderError, OrderResult};
use crate::types::Side;

/// Reference slippage tolerance: 1%
pub const DEFAULT_SLIPPAGE_TOLERANCE: Decimal = dec!(0.01);

// ============================================================================
// Slippage
// ============================================================================

/// Multiplier applied to a quoted price on the given side.
pub fn slippage_factor(side: Side, tolerance: Decimal) -> Decimal {
    match side {
        Side::Sell => Decimal::ONE + tolerance,
        Side::Buy => Decimal::ONE - tolerance,
    }
}

/// Derive the effective price of an order.
///
/// Negative inputs are passed through the same arithmetic; rejecting them is
/// left to [`crate::types::Order::new`].
///
/// # Errors
///
/// [`OrderError::PriceOutOfRange`] if the product does not fit in an `i64`.
///
/// # Example
///
/// ```
/// use batch_matcher::types::price::slipped_price;
/// use batch_matcher::types::Side;
/// use rust_decimal_macros::dec;
///
/// // Truncation toward zero
/// assert_eq!(slipped_price(Side::Sell, 1005, dec!(0.01)), Ok(1015));
/// assert_eq!(slipped_price(Side::Buy, 1005, dec!(0.01)), Ok(994));
/// ```
pub fn slipped_price(side: Side, price: i64, tolerance: Decimal) -> OrderResult<i64> {
    Decimal::from(price)
        .checked_mul(slippage_factor(side, tolerance))
        .map(|product| product.trunc())
        .and_then(|truncated| truncated.to_i64())
        .ok_or(OrderError::PriceOutOfRange(price))
}

/// Truncated mean of two prices, safe against overflow.
#[inline]
pub fn midpoint(a: u64, b: u64) -> u64 {
    ((a as u128 + b as u128) / 2) as u64
}

// ============================================================================
// Unit Tests
// ============================================================================
