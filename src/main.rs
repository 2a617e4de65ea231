//! Batch Matcher - demo binary
//!
//! Submits a fixed batch of bids and asks, runs one matching pass and prints
//! the trades and the pass receipt.
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --config matcher.toml --algorithm FIFO
//! ```

use clap::Parser;
use log::{error, info};

use batch_matcher::types::Side;
use batch_matcher::{Exchange, ExchangeConfig, PassReceipt, Scenario};

#[derive(Debug, Parser)]
#[command(version, about = "Run one batch matching pass over a demo order batch")]
struct Args {
    /// TOML configuration file; defaults are used when missing
    #[arg(short, long)]
    config: Option<String>,

    /// Matching algorithm tag
    #[arg(short, long, default_value = "FIFO")]
    algorithm: String,
}

/// Demo batch: bids quoted 1030-1039, asks quoted 1000-1009.
const DEMO_BATCH: &[(Side, i64, i64)] = &[
    (Side::Buy, 5, 1033),
    (Side::Sell, 7, 1004),
    (Side::Buy, 6, 1039),
    (Side::Sell, 5, 1000),
    (Side::Buy, 7, 1030),
    (Side::Sell, 6, 1009),
    (Side::Buy, 5, 1036),
    (Side::Sell, 7, 1002),
    (Side::Buy, 6, 1031),
    (Side::Sell, 5, 1007),
    (Side::Buy, 7, 1038),
    (Side::Sell, 6, 1001),
];

fn main() {
    env_logger::try_init().unwrap_or_default();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExchangeConfig::from_file_or_default(path),
        None => ExchangeConfig::default(),
    };
    info!(
        "exchange {}/{} with slippage tolerance {}",
        config.asset, config.base, config.slippage_tolerance
    );

    let mut exchange = Exchange::new(config);
    let seller = exchange.add_actor(1000, 1000);
    let buyer = exchange.add_actor(1000, 1000);

    let scenario = Scenario::from_rows(DEMO_BATCH);
    if let Err(e) = scenario.submit(&mut exchange, seller, buyer) {
        error!("demo batch rejected: {}", e);
        std::process::exit(1);
    }

    let result = exchange.run_match_pass(&args.algorithm);

    println!("{}", result);
    for trade in &result.matches {
        println!("{}", result.describe(trade));
    }

    match PassReceipt::from_result(&result) {
        Ok(receipt) => println!("pass {} state root {}", receipt.pass_id, receipt.state_root_hex()),
        Err(e) => error!("failed to build receipt: {}", e),
    }
}
