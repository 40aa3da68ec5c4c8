//! Loaded entity snapshot.

use super::{BotConfig, Trade, User, Wallet};

/// Everything the dashboard shows for one session, loaded in one pass.
///
/// Each slot is filled independently; a failed read leaves its slot empty
/// while the others populate. The snapshot lives until sign-out and is
/// reused across tab switches.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub profile: Option<User>,
    pub wallets: Vec<Wallet>,
    pub trades: Vec<Trade>,
    pub bots: Vec<BotConfig>,
}

impl DashboardSnapshot {
    /// A snapshot with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }
}
