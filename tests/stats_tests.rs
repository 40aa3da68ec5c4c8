//! Tests for dashboard stats aggregation and display formatting.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use cerberus::domain::stats::{format_sol, format_timestamp, total_balance};
use cerberus::domain::{DashboardSnapshot, DashboardStats, UserId};
use cerberus::testkit::domain as build;

#[test]
fn zero_entities_shows_zero_counts_and_zero_balance() {
    let stats = DashboardStats::from_snapshot(&DashboardSnapshot::empty());

    assert_eq!(stats.wallet_count, 0);
    assert_eq!(stats.trade_count, 0);
    assert_eq!(stats.active_bot_count, 0);
    assert_eq!(format_sol(stats.total_balance), "0.0000 SOL");
}

#[test]
fn total_balance_is_the_sum_over_exactly_the_wallets_passed() {
    let user_id = UserId::new();
    let wallets = vec![
        build::wallet(user_id, dec!(1.2345)),
        build::wallet(user_id, dec!(2.0)),
        build::wallet(user_id, dec!(0.0005)),
    ];

    assert_eq!(total_balance(&wallets), dec!(3.2350));
    assert_eq!(total_balance(&[]), Decimal::ZERO);
}

#[test]
fn stats_aggregate_the_snapshot() {
    let user_id = UserId::new();
    let snapshot = DashboardSnapshot {
        profile: Some(build::user(user_id, "degen")),
        wallets: vec![
            build::wallet(user_id, dec!(1.5)),
            build::wallet(user_id, dec!(2.5)),
        ],
        trades: build::trades(user_id, 4),
        bots: vec![
            build::bot(user_id, true),
            build::bot(user_id, false),
            build::bot(user_id, true),
        ],
    };

    let stats = DashboardStats::from_snapshot(&snapshot);
    assert_eq!(stats.wallet_count, 2);
    assert_eq!(stats.trade_count, 4);
    assert_eq!(stats.active_bot_count, 2);
    assert_eq!(stats.total_balance, dec!(4));
}

#[test]
fn sol_formatting_uses_four_decimal_places() {
    assert_eq!(format_sol(dec!(0)), "0.0000 SOL");
    assert_eq!(format_sol(dec!(12.5)), "12.5000 SOL");
    assert_eq!(format_sol(dec!(0.123456)), "0.1235 SOL");
    assert_eq!(format_sol(dec!(1000)), "1000.0000 SOL");
}

#[test]
fn timestamp_formatting_is_month_day_year_hour_minute() {
    let morning = Utc.with_ymd_and_hms(2025, 1, 15, 9, 7, 42).unwrap();
    assert_eq!(format_timestamp(morning), "Jan 15, 2025, 09:07 AM");

    let evening = Utc.with_ymd_and_hms(2025, 12, 3, 23, 59, 0).unwrap();
    assert_eq!(format_timestamp(evening), "Dec 3, 2025, 11:59 PM");
}
