//! Common domain types for the CEX.IO API.

use serde::{Deserialize, Serialize};

/// Market used when the caller has no preference.
pub const DEFAULT_MARKET: &str = "BTC/USD";
/// Default order book depth.
pub const DEFAULT_DEPTH: u32 = 1;
/// Default trade history cursor.
pub const DEFAULT_SINCE: u64 = 1;
/// Default leverage for margin positions.
pub const DEFAULT_LEVERAGE: u32 = 2;

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Wire representation used in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a margin position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    /// Profits when the price rises
    Long,
    /// Profits when the price falls
    Short,
}

impl PositionType {
    /// Wire representation used in the `ptype` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionType::Long => "long",
            PositionType::Short => "short",
        }
    }
}

impl std::fmt::Display for PositionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Side::Buy.to_string(), "buy");
        assert_eq!(Side::Sell.to_string(), "sell");
        assert_eq!(PositionType::Long.to_string(), "long");
        assert_eq!(
            serde_json::to_string(&PositionType::Short).unwrap(),
            "\"short\""
        );
    }
}
