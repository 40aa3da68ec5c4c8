//! Wallet record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{UserId, WalletId};

/// A user-owned wallet from the `wallets` collection.
///
/// `sol_balance` is non-negative by store invariant. Only rows with
/// `is_active = true` are loaded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub user_id: UserId,
    pub name: String,
    pub public_key: String,
    pub wallet_type: String,
    pub sol_balance: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_balance_update: Option<DateTime<Utc>>,
}

impl Wallet {
    /// Truncated public key for display: `first8…last8`.
    ///
    /// Short keys are shown as-is.
    pub fn short_public_key(&self) -> String {
        let key = &self.public_key;
        if key.chars().count() <= 16 {
            return key.clone();
        }
        let head: String = key.chars().take(8).collect();
        let tail: String = key.chars().skip(key.chars().count() - 8).collect();
        format!("{head}...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet(key: &str) -> Wallet {
        Wallet {
            id: WalletId::new(),
            user_id: UserId::new(),
            name: "sniper".into(),
            public_key: key.into(),
            wallet_type: "trading".into(),
            sol_balance: dec!(1.5),
            is_active: true,
            created_at: Utc::now(),
            last_balance_update: None,
        }
    }

    #[test]
    fn short_public_key_truncates_long_keys() {
        let w = wallet("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU");
        assert_eq!(w.short_public_key(), "7xKXtg2C...uJosgAsU");
    }

    #[test]
    fn short_public_key_keeps_short_keys() {
        let w = wallet("abc123");
        assert_eq!(w.short_public_key(), "abc123");
    }
}
