//! Dashboard summary statistics.
//!
//! Pure aggregation over a loaded [`DashboardSnapshot`] plus the display
//! formatting used across the dashboard views.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::snapshot::DashboardSnapshot;
use super::wallet::Wallet;

/// Summary figures for the overview tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub wallet_count: usize,
    /// Count of loaded trades. The loader caps the trade page at 10, so
    /// this is a display-limited figure, not a lifetime total.
    pub trade_count: usize,
    pub active_bot_count: usize,
    pub total_balance: Decimal,
}

impl DashboardStats {
    /// Aggregate a loaded snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        Self {
            wallet_count: snapshot.wallets.len(),
            trade_count: snapshot.trades.len(),
            active_bot_count: snapshot.bots.iter().filter(|b| b.is_active).count(),
            total_balance: total_balance(&snapshot.wallets),
        }
    }
}

/// Sum of `sol_balance` over exactly the wallets passed in.
#[must_use]
pub fn total_balance(wallets: &[Wallet]) -> Decimal {
    wallets.iter().map(|w| w.sol_balance).sum()
}

/// Format a SOL amount with fixed 4 decimal places and the currency suffix.
#[must_use]
pub fn format_sol(amount: Decimal) -> String {
    format!("{:.4} SOL", amount.round_dp(4))
}

/// Format a timestamp as `Mon D, YYYY, HH:MM AM/PM`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BotConfig, BotId, UserId, WalletId};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn wallet(balance: Decimal) -> Wallet {
        Wallet {
            id: WalletId::new(),
            user_id: UserId::new(),
            name: "w".into(),
            public_key: "key".into(),
            wallet_type: "trading".into(),
            sol_balance: balance,
            is_active: true,
            created_at: Utc::now(),
            last_balance_update: None,
        }
    }

    fn bot(active: bool) -> BotConfig {
        BotConfig {
            id: BotId::new(),
            user_id: UserId::new(),
            bot_type: "volume".into(),
            name: "b".into(),
            is_active: active,
            config_json: serde_json::Value::Null,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_run: None,
        }
    }

    #[test]
    fn total_balance_sums_passed_wallets() {
        let wallets = vec![wallet(dec!(1.25)), wallet(dec!(0.5)), wallet(dec!(3))];
        assert_eq!(total_balance(&wallets), dec!(4.75));
    }

    #[test]
    fn total_balance_of_empty_input_is_zero() {
        assert_eq!(total_balance(&[]), Decimal::ZERO);
    }

    #[test]
    fn stats_count_only_active_bots() {
        let snapshot = DashboardSnapshot {
            profile: None,
            wallets: vec![wallet(dec!(2))],
            trades: vec![],
            bots: vec![bot(true), bot(false), bot(true)],
        };
        let stats = DashboardStats::from_snapshot(&snapshot);
        assert_eq!(stats.wallet_count, 1);
        assert_eq!(stats.trade_count, 0);
        assert_eq!(stats.active_bot_count, 2);
        assert_eq!(stats.total_balance, dec!(2));
    }

    #[test]
    fn empty_snapshot_yields_zero_stats() {
        let stats = DashboardStats::from_snapshot(&DashboardSnapshot::empty());
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(format_sol(stats.total_balance), "0.0000 SOL");
    }

    #[test]
    fn format_sol_fixes_four_decimals() {
        assert_eq!(format_sol(dec!(1.5)), "1.5000 SOL");
        assert_eq!(format_sol(dec!(0.12345678)), "0.1235 SOL");
        assert_eq!(format_sol(Decimal::ZERO), "0.0000 SOL");
    }

    #[test]
    fn format_timestamp_matches_dashboard_style() {
        let at = Utc.with_ymd_and_hms(2025, 6, 3, 14, 5, 0).unwrap();
        assert_eq!(format_timestamp(at), "Jun 3, 2025, 02:05 PM");
    }
}
