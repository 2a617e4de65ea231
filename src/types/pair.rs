//! Asset/base labels for the single trading pair an exchange serves.

use std::fmt;

/// The asset being traded and the base it is quoted in.
///
/// Labels are presentation only; matching never looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradingPair {
    pub asset: String,
    pub base: String,
}

impl TradingPair {
    pub fn new(asset: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            base: base.into(),
        }
    }
}

impl Default for TradingPair {
    fn default() -> Self {
        Self::new("BMB", "mUSDT")
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display() {
        assert_eq!(TradingPair::new("BTC", "USD").to_string(), "BTC/USD");
        assert_eq!(TradingPair::default().to_string(), "BMB/mUSDT");
    }
}
