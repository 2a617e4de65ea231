//! Receipt summarising a completed matching pass.
//!
//! The receipt carries a state root: a SHA-256 digest over the SSZ encoding of
//! every trade in the pass, in match order. Two passes over the same batch
//! produce the same root.

use ssz_rs::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::ReceiptError;
use crate::types::MatchResult;

/// Summary of a matching pass.
///
/// ## Example
///
/// ```
/// use batch_matcher::types::{MatchResult, PassReceipt, TradingPair};
///
/// let result = MatchResult::new(1, TradingPair::default());
/// let receipt = PassReceipt::from_result(&result).unwrap();
///
/// assert!(receipt.is_empty());
/// assert_eq!(receipt.trades_executed, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct PassReceipt {
    /// Pass sequence number
    pub pass_id: u64,

    /// Number of resting orders the pass started with
    pub orders_processed: u64,

    /// Number of trades executed in this pass
    pub trades_executed: u64,

    /// Total matched volume
    pub total_volume: u128,

    /// SHA-256 over the encoded trades (32 bytes)
    pub state_root: [u8; 32],
}

impl PassReceipt {
    pub fn new(
        pass_id: u64,
        orders_processed: u64,
        trades_executed: u64,
        total_volume: u128,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            pass_id,
            orders_processed,
            trades_executed,
            total_volume,
            state_root,
        }
    }

    /// Build the receipt of a finished pass.
    ///
    /// # Errors
    ///
    /// [`ReceiptError::Encoding`] if a trade cannot be SSZ-encoded.
    pub fn from_result(result: &MatchResult) -> Result<Self, ReceiptError> {
        let mut hasher = Sha256::new();
        for trade in &result.matches {
            let bytes = ssz_rs::serialize(trade).map_err(|e| ReceiptError::Encoding {
                trade_id: trade.id,
                reason: format!("{e:?}"),
            })?;
            hasher.update(&bytes);
        }

        let mut state_root = [0u8; 32];
        state_root.copy_from_slice(&hasher.finalize());

        Ok(Self::new(
            result.pass_id,
            result.orders_processed() as u64,
            result.trade_count() as u64,
            result.total_volume,
            state_root,
        ))
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Check if this receipt represents a pass without trades
    pub fn is_empty(&self) -> bool {
        self.trades_executed == 0
    }

    /// Calculate the fill rate (trades / orders)
    ///
    /// Returns None if the pass started with an empty book.
    pub fn fill_rate(&self) -> Option<f64> {
        if self.orders_processed == 0 {
            None
        } else {
            Some(self.trades_executed as f64 / self.orders_processed as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
