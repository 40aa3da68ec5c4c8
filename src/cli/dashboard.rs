//! Dashboard rendering.

use std::path::Path;
use std::sync::Arc;

use tabled::{Table, Tabled};

use crate::app::{DashboardController, DashboardState, DashboardTab, EntityLoader, SessionManager};
use crate::cli::{connect, output};
use crate::config::Config;
use crate::domain::stats::{format_sol, format_timestamp};
use crate::domain::{DashboardSnapshot, DashboardStats, Session};
use crate::error::{AuthError, Error, Result};

/// Show one tab of the account dashboard.
///
/// The snapshot is loaded once for the session; the tab flag only selects
/// which view of it is rendered.
pub async fn show<P: AsRef<Path>>(config_path: P, tab: DashboardTab) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();
    let backend = connect(&config);
    let manager = SessionManager::new(backend.auth, Arc::clone(&backend.store));
    let loader = EntityLoader::new(backend.store);
    let controller = DashboardController::new();

    let Some(session) = manager.restore().await? else {
        controller.restore_settled_unauthenticated();
        output::error("Not signed in.");
        output::note("Run `cerberus login` first.");
        return Err(Error::Auth(AuthError::NotSignedIn));
    };

    let epoch = controller.session_established();

    let spinner = output::spinner("Loading your dashboard...");
    let snapshot = loader.load(&session.user_id).await;
    spinner.finish_and_clear();

    controller.apply_snapshot(epoch, snapshot);
    controller.select_tab(tab);

    let snapshot = controller.snapshot().unwrap_or_default();

    output::header(env!("CARGO_PKG_VERSION"));
    render_greeting(&session, &snapshot);

    match controller.state() {
        DashboardState::Authenticated { tab } => match tab {
            DashboardTab::Overview => render_overview(&snapshot),
            DashboardTab::Wallets => render_wallets(&snapshot),
            DashboardTab::Trades => render_trades(&snapshot),
            DashboardTab::Bots => render_bots(&snapshot),
        },
        _ => unreachable!("session was just established"),
    }

    println!();
    Ok(())
}

fn render_greeting(session: &Session, snapshot: &DashboardSnapshot) {
    match &snapshot.profile {
        Some(profile) => {
            println!("  Welcome back, {}", profile.username);
            output::note(&format!(
                "Member since {}",
                format_timestamp(profile.created_at)
            ));
        }
        None => {
            println!("  Welcome back, {}", session.display_name());
        }
    }
}

fn render_overview(snapshot: &DashboardSnapshot) {
    let stats = DashboardStats::from_snapshot(snapshot);

    output::section("Overview");
    output::field("Wallets", stats.wallet_count);
    output::field("Trades", stats.trade_count);
    output::field("Active bots", stats.active_bot_count);
    output::field("Total balance", format_sol(stats.total_balance));

    output::section("Recent activity");
    if snapshot.trades.is_empty() {
        output::note("No trading activity yet. Start by creating a wallet!");
        return;
    }
    for trade in snapshot.trades.iter().take(5) {
        let side = match trade.trade_type {
            crate::domain::TradeSide::Buy => output::positive(trade.trade_type.label()),
            crate::domain::TradeSide::Sell => output::negative(trade.trade_type.label()),
        };
        println!(
            "  {side} {} {} {} {}",
            trade.symbol_or_unknown(),
            format_sol(trade.sol_amount),
            output::muted(format_timestamp(trade.created_at)),
            trade.status,
        );
    }
}

#[derive(Tabled)]
struct WalletRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    wallet_type: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

fn render_wallets(snapshot: &DashboardSnapshot) {
    output::section("Your wallets");
    if snapshot.wallets.is_empty() {
        output::note("No wallets yet. Create your first wallet to start trading.");
        return;
    }

    let rows: Vec<WalletRow> = snapshot
        .wallets
        .iter()
        .map(|w| WalletRow {
            name: w.name.clone(),
            wallet_type: w.wallet_type.clone(),
            address: w.short_public_key(),
            balance: format_sol(w.sol_balance),
        })
        .collect();
    output::table(&Table::new(rows).to_string());
}

#[derive(Tabled)]
struct TradeRow {
    #[tabled(rename = "Type")]
    side: &'static str,
    #[tabled(rename = "Token")]
    token: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    date: String,
}

fn render_trades(snapshot: &DashboardSnapshot) {
    output::section("Trading history");
    if snapshot.trades.is_empty() {
        output::note("No trades yet. Start trading to see your transaction history.");
        return;
    }

    let rows: Vec<TradeRow> = snapshot
        .trades
        .iter()
        .map(|t| TradeRow {
            side: t.trade_type.label(),
            token: t.symbol_or_unknown().to_string(),
            amount: format_sol(t.sol_amount),
            status: t.status.clone(),
            date: format_timestamp(t.created_at),
        })
        .collect();
    output::table(&Table::new(rows).to_string());
}

fn render_bots(snapshot: &DashboardSnapshot) {
    output::section("Trading bots");
    if snapshot.bots.is_empty() {
        output::note("No bots configured. Create your first trading bot to automate your strategy.");
        return;
    }

    for bot in &snapshot.bots {
        let status = if bot.is_active {
            output::positive(bot.status_label())
        } else {
            output::negative(bot.status_label())
        };
        println!("  {} [{}] {status}", bot.name, bot.bot_type);
        output::note(&format!("Updated {}", format_timestamp(bot.updated_at)));
        if let Some(last_run) = bot.last_run {
            output::note(&format!("Last run {}", format_timestamp(last_run)));
        }
    }
}
