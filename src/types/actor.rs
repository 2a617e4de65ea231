//! Market participants.
//!
//! Balances are recorded at registration and never touched by matching.

/// An account that owns orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    pub asset_volume: u64,
    pub base_volume: u64,
}

impl Actor {
    pub fn new(id: u64, asset_volume: u64, base_volume: u64) -> Self {
        Self {
            id,
            asset_volume,
            base_volume,
        }
    }
}
