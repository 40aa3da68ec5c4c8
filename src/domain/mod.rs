//! Store-agnostic domain types.

mod bot;
mod ids;
mod session;
mod snapshot;
mod trade;
mod user;
mod wallet;

pub mod stats;

// Core domain types
pub use bot::BotConfig;
pub use ids::{BotId, TradeId, UserId, WalletId};
pub use session::Session;
pub use snapshot::DashboardSnapshot;
pub use trade::{Trade, TradeSide};
pub use user::User;
pub use wallet::Wallet;

// Aggregation
pub use stats::DashboardStats;
