//! Trade record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{TradeId, UserId, WalletId};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Uppercase label for display.
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
        }
    }
}

/// A persisted trade from the `trades` collection.
///
/// `wallet_id` references a wallet owned by the same user. `status` is an
/// open tag set by the execution pipeline (`pending`, `executed`, ...);
/// unknown values pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub user_id: UserId,
    pub wallet_id: WalletId,
    pub token_address: String,
    #[serde(default)]
    pub token_symbol: Option<String>,
    pub trade_type: TradeSide,
    pub sol_amount: Decimal,
    #[serde(default)]
    pub token_amount: Option<Decimal>,
    #[serde(default)]
    pub price_per_token: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl Trade {
    /// Symbol for display, falling back when the indexer had none.
    pub fn symbol_or_unknown(&self) -> &str {
        self.token_symbol.as_deref().unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_side_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), "\"buy\"");
        let side: TradeSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, TradeSide::Sell);
    }

    #[test]
    fn trade_side_labels() {
        assert_eq!(TradeSide::Buy.label(), "BUY");
        assert_eq!(TradeSide::Sell.label(), "SELL");
    }
}
