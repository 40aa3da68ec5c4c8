//! In-memory record store double.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{BotConfig, Trade, User, UserId, Wallet};
use crate::error::{Error, Result};
use crate::port::{NewUser, RecordStore};

/// Which reads should fail. Each switch fails exactly that collection's
/// read with a store error, leaving the others untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailureSwitches {
    pub profile: bool,
    pub wallets: bool,
    pub trades: bool,
    pub bots: bool,
    pub insert: bool,
}

/// In-memory [`RecordStore`] backed by plain vectors.
///
/// Applies the same filter/order/limit semantics the real store is asked
/// for, counts calls per method, and can fail any collection on demand.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    wallets: RwLock<Vec<Wallet>>,
    trades: RwLock<Vec<Trade>>,
    bots: RwLock<Vec<BotConfig>>,
    fail: RwLock<FailureSwitches>,
    load_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&self, user: User) {
        self.users.write().push(user);
    }

    pub fn push_wallet(&self, wallet: Wallet) {
        self.wallets.write().push(wallet);
    }

    pub fn push_trade(&self, trade: Trade) {
        self.trades.write().push(trade);
    }

    pub fn push_bot(&self, bot: BotConfig) {
        self.bots.write().push(bot);
    }

    pub fn set_failures(&self, switches: FailureSwitches) {
        *self.fail.write() = switches;
    }

    /// Total read calls across the four collections.
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Users inserted through the port.
    pub fn inserted_users(&self) -> Vec<User> {
        self.users.read().clone()
    }

    fn fail_if(&self, switch: bool, what: &str) -> Result<()> {
        if switch {
            Err(Error::Store(format!("{what} read unavailable")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn user_profile(&self, id: &UserId) -> Result<Option<User>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(self.fail.read().profile, "profile")?;
        Ok(self.users.read().iter().find(|u| u.id == *id).cloned())
    }

    async fn active_wallets(&self, id: &UserId) -> Result<Vec<Wallet>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(self.fail.read().wallets, "wallet")?;
        Ok(self
            .wallets
            .read()
            .iter()
            .filter(|w| w.user_id == *id && w.is_active)
            .cloned()
            .collect())
    }

    async fn recent_trades(&self, id: &UserId, limit: usize) -> Result<Vec<Trade>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(self.fail.read().trades, "trade")?;
        let mut rows: Vec<Trade> = self
            .trades
            .read()
            .iter()
            .filter(|t| t.user_id == *id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn bot_configs(&self, id: &UserId) -> Result<Vec<BotConfig>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(self.fail.read().bots, "bot config")?;
        Ok(self
            .bots
            .read()
            .iter()
            .filter(|b| b.user_id == *id)
            .cloned()
            .collect())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(self.fail.read().insert, "profile insert")?;
        self.users.write().push(User {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
            created_at: chrono::Utc::now(),
            last_login: None,
        });
        Ok(())
    }
}
