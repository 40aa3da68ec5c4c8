//! Per-user entity loading.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{DashboardSnapshot, UserId};
use crate::port::RecordStore;

/// Most recent trades fetched per session.
pub const TRADE_PAGE_LIMIT: usize = 10;

/// Loads the dashboard snapshot for an authenticated user.
///
/// The four reads are issued concurrently and settle independently; a
/// failed read degrades its slot to empty instead of aborting the others.
/// The caller gets a snapshot once all four have settled, never an error.
pub struct EntityLoader {
    store: Arc<dyn RecordStore>,
}

impl EntityLoader {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch profile, wallets, trades and bot configs for `user_id`.
    pub async fn load(&self, user_id: &UserId) -> DashboardSnapshot {
        let (profile, wallets, mut trades, bots) = tokio::join!(
            self.load_profile(user_id),
            self.load_wallets(user_id),
            self.load_trades(user_id),
            self.load_bots(user_id),
        );

        // The store is asked for at most TRADE_PAGE_LIMIT rows; cap again
        // so a misbehaving backend cannot push an over-long list to the UI.
        trades.truncate(TRADE_PAGE_LIMIT);

        debug!(
            wallets = wallets.len(),
            trades = trades.len(),
            bots = bots.len(),
            profile = profile.is_some(),
            "snapshot ready"
        );

        DashboardSnapshot {
            profile,
            wallets,
            trades,
            bots,
        }
    }

    async fn load_profile(&self, user_id: &UserId) -> Option<crate::domain::User> {
        match self.store.user_profile(user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "profile read failed");
                None
            }
        }
    }

    async fn load_wallets(&self, user_id: &UserId) -> Vec<crate::domain::Wallet> {
        match self.store.active_wallets(user_id).await {
            Ok(wallets) => wallets,
            Err(err) => {
                warn!(error = %err, "wallet read failed");
                Vec::new()
            }
        }
    }

    async fn load_trades(&self, user_id: &UserId) -> Vec<crate::domain::Trade> {
        match self.store.recent_trades(user_id, TRADE_PAGE_LIMIT).await {
            Ok(trades) => trades,
            Err(err) => {
                warn!(error = %err, "trade read failed");
                Vec::new()
            }
        }
    }

    async fn load_bots(&self, user_id: &UserId) -> Vec<crate::domain::BotConfig> {
        match self.store.bot_configs(user_id).await {
            Ok(bots) => bots,
            Err(err) => {
                warn!(error = %err, "bot config read failed");
                Vec::new()
            }
        }
    }
}
