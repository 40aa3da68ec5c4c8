//! Command-line interface definitions.

pub mod account;
pub mod check;
pub mod dashboard;
pub mod output;
pub mod status;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::adapter::rest::{RestAuth, RestStore, TokenCell};
use crate::app::DashboardTab;
use crate::config::Config;
use crate::port::{AuthProvider, RecordStore};

/// Cerberus - account dashboard for the trading platform.
#[derive(Parser, Debug)]
#[command(name = "cerberus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to an existing account
    Login(ConfigPathArg),

    /// Create a new account
    Register(ConfigPathArg),

    /// Sign out and clear the cached session
    Logout(ConfigPathArg),

    /// Show the account dashboard
    Dashboard(DashboardArgs),

    /// Show session state and backend health
    Status(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `cerberus check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Probe backend health
    Health(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `dashboard` subcommand.
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Tab to show: overview, wallets, trades or bots
    #[arg(long, default_value = "overview")]
    pub tab: DashboardTab,
}

/// Backend handles shared by the account and dashboard commands.
pub struct Backend {
    pub auth: Arc<dyn AuthProvider>,
    pub store: Arc<dyn RecordStore>,
}

/// Construct the REST adapters against the configured backend.
///
/// Both adapters share one token cell so store reads pick up the
/// signed-in user's bearer token automatically.
#[must_use]
pub fn connect(config: &Config) -> Backend {
    let token = TokenCell::new();
    let auth: Arc<dyn AuthProvider> = Arc::new(RestAuth::new(&config.backend, token.clone()));
    let store: Arc<dyn RecordStore> = Arc::new(RestStore::new(&config.backend, token));
    Backend { auth, store }
}
