//! Record store port.
//!
//! Defines the read/insert interface over the per-user collections. Each
//! method maps to one filtered/ordered/limited read against a named
//! collection; implementations return errors by value with the store's own
//! message.

use async_trait::async_trait;

use crate::domain::{BotConfig, Trade, User, UserId, Wallet};
use crate::error::Result;

/// Row inserted into the `users` collection after sign-up.
///
/// The provider owns credentials; this record only mirrors the identity so
/// the dashboard can read a profile.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NewUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
}

/// Read/insert operations over the user-owned collections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a single user profile by identifier.
    async fn user_profile(&self, id: &UserId) -> Result<Option<User>>;

    /// Fetch the user's active wallets (`is_active = true`). No ordering
    /// is guaranteed.
    async fn active_wallets(&self, id: &UserId) -> Result<Vec<Wallet>>;

    /// Fetch the user's most recent trades, ordered by creation timestamp
    /// descending, at most `limit` rows.
    async fn recent_trades(&self, id: &UserId, limit: usize) -> Result<Vec<Trade>>;

    /// Fetch all of the user's bot configurations.
    async fn bot_configs(&self, id: &UserId) -> Result<Vec<BotConfig>>;

    /// Insert a profile row for a freshly created identity.
    async fn insert_user(&self, user: &NewUser) -> Result<()>;
}
