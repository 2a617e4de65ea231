//! Aggregated outcome of one matching pass.

use std::fmt;

use crate::types::{MatchedOrder, Order, TradingPair};

/// Trades produced by a matching pass plus their aggregate statistics.
///
/// `highest_price` starts at `u64::MIN` and `lowest_price` at `u64::MAX`, so
/// the first recorded trade always sets both. Use [`MatchResult::price_band`]
/// to read them without caring about the sentinels.
///
/// `total_volume` is a `u128`. Each trade volume fits in an `i64`, so no pass
/// can hold enough trades to overflow it.
///
/// The result also owns the pass arena: every order that took part in the pass,
/// indexed by resting index, with its final status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub pass_id: u64,
    pub pair: TradingPair,
    pub matches: Vec<MatchedOrder>,
    pub total_volume: u128,
    pub highest_price: u64,
    pub lowest_price: u64,
    sell_orders: Vec<Order>,
    buy_orders: Vec<Order>,
}

impl MatchResult {
    /// Create an empty result for the given pass.
    pub fn new(pass_id: u64, pair: TradingPair) -> Self {
        Self {
            pass_id,
            pair,
            matches: Vec::with_capacity(1),
            total_volume: 0,
            highest_price: u64::MIN,
            lowest_price: u64::MAX,
            sell_orders: Vec::new(),
            buy_orders: Vec::new(),
        }
    }

    /// Fold a trade into the aggregate and append it to the trade list.
    pub fn record(&mut self, trade: MatchedOrder) {
        self.total_volume += u128::from(trade.volume);
        self.highest_price = self.highest_price.max(trade.price);
        self.lowest_price = self.lowest_price.min(trade.price);
        self.matches.push(trade);
    }

    /// Hand the pass arena over to the result.
    pub(crate) fn attach_orders(&mut self, sell_orders: Vec<Order>, buy_orders: Vec<Order>) {
        self.sell_orders = sell_orders;
        self.buy_orders = buy_orders;
    }

    #[inline]
    pub fn trade_count(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// `(lowest, highest)` agreed price, or `None` when nothing traded.
    pub fn price_band(&self) -> Option<(u64, u64)> {
        if self.is_empty() {
            None
        } else {
            Some((self.lowest_price, self.highest_price))
        }
    }

    /// Sell orders of the pass, indexed by resting index
    pub fn sell_orders(&self) -> &[Order] {
        &self.sell_orders
    }

    /// Buy orders of the pass, indexed by resting index
    pub fn buy_orders(&self) -> &[Order] {
        &self.buy_orders
    }

    /// Number of orders that took part in the pass
    pub fn orders_processed(&self) -> usize {
        self.sell_orders.len() + self.buy_orders.len()
    }

    /// Resolve the sell side of a trade.
    pub fn sell_order(&self, trade: &MatchedOrder) -> Option<&Order> {
        self.sell_orders.get(trade.sell_index as usize)
    }

    /// Resolve the buy side of a trade.
    pub fn buy_order(&self, trade: &MatchedOrder) -> Option<&Order> {
        self.buy_orders.get(trade.buy_index as usize)
    }

    /// Render a single trade with the actors and pair labels of this pass.
    pub fn describe(&self, trade: &MatchedOrder) -> String {
        format!(
            "{} {} @ {} {} \t {} -> {}",
            trade.volume,
            self.pair.asset,
            trade.price,
            self.pair.base,
            trade.seller_id,
            trade.buyer_id
        )
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price_band() {
            None => f.write_str("0 trx."),
            Some((low, high)) => write!(
                f,
                "{} trxs, total of {} {}. high {} {} low {} {}",
                self.trade_count(),
                self.total_volume,
                self.pair.asset,
                high,
                self.pair.base,
                low,
                self.pair.base,
            ),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(id: u64, price: u64, volume: u64) -> MatchedOrder {
        MatchedOrder {
            id,
            price,
            volume,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_result() {
        let result = MatchResult::new(1, TradingPair::default());

        assert!(result.is_empty());
        assert_eq!(result.total_volume, 0);
        assert_eq!(result.highest_price, u64::MIN);
        assert_eq!(result.lowest_price, u64::MAX);
        assert_eq!(result.price_band(), None);
        assert_eq!(result.to_string(), "0 trx.");
    }

    #[test]
    fn test_first_trade_sets_both_bounds() {
        let mut result = MatchResult::new(1, TradingPair::default());
        result.record(trade(1, 500, 3));

        assert_eq!(result.highest_price, 500);
        assert_eq!(result.lowest_price, 500);
        assert_eq!(result.total_volume, 3);
    }

    #[test]
    fn test_aggregates_fold_in_order() {
        let mut result = MatchResult::new(1, TradingPair::default());
        result.record(trade(1, 1005, 5));
        result.record(trade(2, 1012, 2));
        result.record(trade(3, 1001, 7));

        assert_eq!(result.trade_count(), 3);
        assert_eq!(result.total_volume, 14);
        assert_eq!(result.price_band(), Some((1001, 1012)));
        assert_eq!(
            result.matches.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            result.to_string(),
            "3 trxs, total of 14 BMB. high 1012 mUSDT low 1001 mUSDT"
        );
    }

    #[test]
    fn test_total_volume_exceeds_u64() {
        let max = i64::MAX as u64;
        let mut result = MatchResult::new(1, TradingPair::default());
        for id in 1..=3 {
            result.record(trade(id, 100, max));
        }

        assert_eq!(result.total_volume, 3 * u128::from(max));
        assert!(result.total_volume > u128::from(u64::MAX));
    }

    #[test]
    fn test_describe_trade() {
        let result = MatchResult::new(1, TradingPair::new("BTC", "USD"));
        let mut t = trade(1, 100, 2);
        t.seller_id = 7;
        t.buyer_id = 8;

        assert_eq!(result.describe(&t), "2 BTC @ 100 USD \t 7 -> 8");
    }
}
