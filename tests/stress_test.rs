//! Randomised batch tests for the matching pass.
//!
//! These tests verify:
//! 1. Trade prices and volumes respect the pass invariants on random books
//! 2. Determinism is preserved across runs (identical receipts)
//! 3. Large batches stay tractable
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::HashMap;
use std::time::Instant;

use batch_matcher::types::price::DEFAULT_SLIPPAGE_TOLERANCE;
use batch_matcher::{Exchange, ExchangeConfig, MatchResult, OrderStatus, PassReceipt, Scenario};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a deterministic batch. Same seed = same batch.
///
/// Bids are quoted a little above asks so that, after slippage, the books
/// overlap partially.
fn generate_batch(count: usize, seed: u64) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut scenario = Scenario::new();

    for _ in 0..count {
        let volume = rng.gen_range(0..=12);
        scenario = if rng.gen_bool(0.5) {
            scenario.bid(volume, rng.gen_range(1000..=1040))
        } else {
            scenario.ask(volume, rng.gen_range(990..=1030))
        };
    }

    scenario
}

fn run_batch(scenario: &Scenario, tolerance: Decimal) -> MatchResult {
    let config = ExchangeConfig::default().with_slippage_tolerance(tolerance);
    let mut exchange = Exchange::new(config);
    let seller = exchange.add_actor(0, 0);
    let buyer = exchange.add_actor(0, 0);

    scenario
        .submit(&mut exchange, seller, buyer)
        .expect("generated orders are valid");
    let result = exchange.run_match_pass("FIFO");
    assert_eq!(exchange.resting_order_count(), 0, "book must be empty after a pass");
    result
}

/// Check every invariant a finished pass must satisfy.
fn assert_pass_invariants(result: &MatchResult) {
    let mut consumed_sell: HashMap<u64, u64> = HashMap::new();
    let mut consumed_buy: HashMap<u64, u64> = HashMap::new();

    for trade in &result.matches {
        let sell = result.sell_order(trade).expect("sell index resolves");
        let buy = result.buy_order(trade).expect("buy index resolves");

        assert!(trade.volume > 0, "trade {} has zero volume", trade.id);
        assert!(sell.slipped_price <= buy.slipped_price);
        assert_eq!(
            u128::from(trade.price),
            (u128::from(sell.slipped_price) + u128::from(buy.slipped_price)) / 2,
            "trade {} is not at the truncated mean",
            trade.id
        );
        assert!(sell.slipped_price <= trade.price && trade.price <= buy.slipped_price);

        *consumed_sell.entry(trade.sell_index).or_default() += trade.volume;
        *consumed_buy.entry(trade.buy_index).or_default() += trade.volume;
    }

    let sell_total: u128 = result.sell_orders().iter().map(|o| u128::from(o.volume)).sum();
    let buy_total: u128 = result.buy_orders().iter().map(|o| u128::from(o.volume)).sum();
    assert!(result.total_volume <= sell_total.min(buy_total));
    assert_eq!(
        result.total_volume,
        result.matches.iter().map(|t| u128::from(t.volume)).sum::<u128>()
    );

    for (orders, consumed) in [
        (result.sell_orders(), &consumed_sell),
        (result.buy_orders(), &consumed_buy),
    ] {
        for order in orders {
            let used = consumed.get(&order.resting_index).copied().unwrap_or(0);
            assert_eq!(order.filled(), used);
            match order.status() {
                OrderStatus::FullyFilled => assert_eq!(used, order.volume),
                OrderStatus::PartiallyFilled => assert!(used > 0 && used < order.volume),
                OrderStatus::Resting => assert_eq!(used, 0),
            }
            if used > 0 {
                assert_ne!(order.status(), OrderStatus::Resting);
            }
        }
    }

    if let Some((low, high)) = result.price_band() {
        assert_eq!(low, result.matches.iter().map(|t| t.price).min().unwrap());
        assert_eq!(high, result.matches.iter().map(|t| t.price).max().unwrap());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn random_batches_hold_invariants() {
    for seed in 0..200 {
        let scenario = generate_batch(60, seed);
        for tolerance in [Decimal::ZERO, DEFAULT_SLIPPAGE_TOLERANCE] {
            let result = run_batch(&scenario, tolerance);
            assert_pass_invariants(&result);
        }
    }
}

#[test]
fn equal_prices_fill_in_submission_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut scenario = Scenario::new().ask(1000, 100);
    for _ in 0..50 {
        scenario = scenario.bid(rng.gen_range(1..=40), 100);
    }

    let result = run_batch(&scenario, Decimal::ZERO);

    let buy_indices: Vec<u64> = result.matches.iter().map(|t| t.buy_index).collect();
    let mut sorted = buy_indices.clone();
    sorted.sort_unstable();
    assert_eq!(buy_indices, sorted, "equal-price bids must fill FIFO");
    assert_pass_invariants(&result);
}

#[test]
fn random_extreme_volumes_hold_invariants() {
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut scenario = Scenario::new();
        for _ in 0..20 {
            let volume = i64::MAX - rng.gen_range(0..=1_000);
            let price = rng.gen_range(i64::MAX - 64..=i64::MAX);
            scenario = if rng.gen_bool(0.5) {
                scenario.bid(volume, price)
            } else {
                scenario.ask(volume, price)
            };
        }

        let result = run_batch(&scenario, Decimal::ZERO);
        assert_pass_invariants(&result);
    }
}

/// Verify determinism: same batch produces identical receipts.
#[test]
fn verify_determinism() {
    const SEED: u64 = 12345;

    let scenario = generate_batch(5_000, SEED);
    let root1 = PassReceipt::from_result(&run_batch(&scenario, DEFAULT_SLIPPAGE_TOLERANCE))
        .unwrap();
    let root2 = PassReceipt::from_result(&run_batch(&scenario, DEFAULT_SLIPPAGE_TOLERANCE))
        .unwrap();

    println!("  Run 1 state root: {}", root1.state_root_hex());
    println!("  Run 2 state root: {}", root2.state_root_hex());
    assert_eq!(root1, root2, "receipts must match for identical batches");
    assert!(!root1.is_empty());

    let other = generate_batch(5_000, SEED + 1);
    let root3 =
        PassReceipt::from_result(&run_batch(&other, DEFAULT_SLIPPAGE_TOLERANCE)).unwrap();
    assert_ne!(root1.state_root, root3.state_root);
}

#[test]
fn stress_large_batch() {
    const ORDER_COUNT: usize = 100_000;

    let scenario = generate_batch(ORDER_COUNT, 42);

    let start = Instant::now();
    let result = run_batch(&scenario, DEFAULT_SLIPPAGE_TOLERANCE);
    let elapsed = start.elapsed();

    println!("  Orders submitted:  {:>12}", ORDER_COUNT);
    println!("  Trades generated:  {:>12}", result.trade_count());
    println!("  Total volume:      {:>12}", result.total_volume);
    println!("  Elapsed time:      {:>12.2?}", elapsed);

    assert_eq!(result.orders_processed(), ORDER_COUNT);
    assert!(result.trade_count() > 0, "Expected some trades to occur");
    assert_pass_invariants(&result);
}
