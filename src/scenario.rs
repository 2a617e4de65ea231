//! Literal order batches for demos and tests.
//!
//! A [`Scenario`] records orders in submission order and replays them into an
//! [`Exchange`]. Asks are submitted for the seller, bids for the buyer.
//!
//! ```
//! use batch_matcher::{Exchange, Scenario};
//!
//! let mut exchange = Exchange::with_pair("BMB", "mUSDT");
//! let seller = exchange.add_actor(1000, 1000);
//! let buyer = exchange.add_actor(1000, 1000);
//!
//! let ids = Scenario::new()
//!     .ask(6, 1000)
//!     .bid(6, 1000)
//!     .bid(1, 1000)
//!     .submit(&mut exchange, seller, buyer)
//!     .unwrap();
//!
//! assert_eq!(ids.len(), 3);
//! assert_eq!(exchange.resting_buy_count(), 2);
//! ```

use crate::error::ExchangeResult;
use crate::exchange::Exchange;
use crate::types::Side;

/// One order of a scenario: side, volume, quoted price.
pub type ScenarioOrder = (Side, i64, i64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    orders: Vec<ScenarioOrder>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a table of `(side, volume, price)` rows.
    pub fn from_rows(rows: &[ScenarioOrder]) -> Self {
        Self {
            orders: rows.to_vec(),
        }
    }

    pub fn ask(mut self, volume: i64, price: i64) -> Self {
        self.orders.push((Side::Sell, volume, price));
        self
    }

    pub fn bid(mut self, volume: i64, price: i64) -> Self {
        self.orders.push((Side::Buy, volume, price));
        self
    }

    pub fn orders(&self) -> &[ScenarioOrder] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total volume on one side
    pub fn volume(&self, side: Side) -> i64 {
        self.orders
            .iter()
            .filter(|(s, _, _)| *s == side)
            .map(|(_, volume, _)| volume)
            .sum()
    }

    /// Submit every order, stopping at the first rejection.
    ///
    /// Returns the assigned order IDs in submission order.
    pub fn submit(
        &self,
        exchange: &mut Exchange,
        seller: u64,
        buyer: u64,
    ) -> ExchangeResult<Vec<u64>> {
        self.orders
            .iter()
            .map(|&(side, volume, price)| {
                let actor = match side {
                    Side::Sell => seller,
                    Side::Buy => buyer,
                };
                exchange.submit_order(actor, side, volume, price)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExchangeError, OrderError};

    #[test]
    fn test_builder_keeps_submission_order() {
        let scenario = Scenario::new().ask(10, 100).bid(4, 110).bid(6, 105);

        assert_eq!(
            scenario.orders(),
            &[(Side::Sell, 10, 100), (Side::Buy, 4, 110), (Side::Buy, 6, 105)]
        );
        assert_eq!(scenario.volume(Side::Buy), 10);
        assert_eq!(scenario.volume(Side::Sell), 10);
    }

    #[test]
    fn test_from_rows() {
        let rows = [(Side::Buy, 1, 2), (Side::Sell, 3, 4)];
        assert_eq!(Scenario::from_rows(&rows), Scenario::new().bid(1, 2).ask(3, 4));
    }

    #[test]
    fn test_submit_routes_actors() {
        let mut exchange = Exchange::default();
        let seller = exchange.add_actor(0, 0);
        let buyer = exchange.add_actor(0, 0);

        let ids = Scenario::new()
            .ask(1, 100)
            .bid(1, 100)
            .submit(&mut exchange, seller, buyer)
            .unwrap();

        assert_eq!(exchange.order(ids[0]).map(|o| o.actor_id), Some(seller));
        assert_eq!(exchange.order(ids[1]).map(|o| o.actor_id), Some(buyer));
    }

    #[test]
    fn test_submit_stops_at_rejection() {
        let mut exchange = Exchange::default();

        let err = Scenario::new()
            .ask(1, 100)
            .ask(-1, 100)
            .ask(1, 100)
            .submit(&mut exchange, 1, 2)
            .unwrap_err();

        assert_eq!(err, ExchangeError::Order(OrderError::NegativeVolume(-1)));
        assert_eq!(exchange.resting_sell_count(), 1);
    }
}
