//! Builders for domain records used across tests.
//!
//! Concise factories so tests focus on assertions rather than construction
//! boilerplate. Timestamps default to now; override fields as needed.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    BotConfig, BotId, Session, Trade, TradeId, TradeSide, User, UserId, Wallet, WalletId,
};

/// A user record with the given id.
pub fn user(id: UserId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        is_verified: false,
        created_at: Utc::now(),
        last_login: None,
    }
}

/// An active wallet owned by `user_id` with the given balance.
pub fn wallet(user_id: UserId, balance: Decimal) -> Wallet {
    Wallet {
        id: WalletId::new(),
        user_id,
        name: "test wallet".into(),
        public_key: "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".into(),
        wallet_type: "trading".into(),
        sol_balance: balance,
        is_active: true,
        created_at: Utc::now(),
        last_balance_update: None,
    }
}

/// A buy trade owned by `user_id` created at the given time.
pub fn trade(user_id: UserId, created_at: DateTime<Utc>) -> Trade {
    Trade {
        id: TradeId::new(),
        user_id,
        wallet_id: WalletId::new(),
        token_address: "So11111111111111111111111111111111111111112".into(),
        token_symbol: Some("BONK".into()),
        trade_type: TradeSide::Buy,
        sol_amount: Decimal::ONE,
        token_amount: None,
        price_per_token: None,
        status: "confirmed".into(),
        created_at,
        executed_at: None,
        confirmed_at: None,
    }
}

/// `n` trades spaced one minute apart, oldest first.
pub fn trades(user_id: UserId, n: usize) -> Vec<Trade> {
    let start = Utc::now() - Duration::minutes(n as i64);
    (0..n)
        .map(|i| trade(user_id, start + Duration::minutes(i as i64)))
        .collect()
}

/// A bot config owned by `user_id`.
pub fn bot(user_id: UserId, active: bool) -> BotConfig {
    BotConfig {
        id: BotId::new(),
        user_id,
        bot_type: "volume".into(),
        name: "test bot".into(),
        is_active: active,
        config_json: serde_json::json!({}),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        last_run: None,
    }
}

/// A live session for `user_id`.
pub fn session(user_id: UserId) -> Session {
    Session {
        user_id,
        email: "trader@example.com".into(),
        username: Some("degen".into()),
        access_token: "test-access-token".into(),
        refresh_token: Some("test-refresh-token".into()),
        expires_at: Some(Utc::now() + Duration::hours(1)),
    }
}
