//! Cerberus - account dashboard for the hosted trading platform.
//!
//! This crate signs a user in against the platform's session provider,
//! loads their owned records (wallets, trades, bot configurations) from the
//! hosted data store, and renders an aggregated dashboard in the terminal.
//!
//! # Architecture
//!
//! The crate keeps the remote services behind ports so the application
//! layer is testable against in-memory doubles:
//!
//! - **`port`** - Trait definitions for the two external collaborators:
//!   the record store and the credential session provider.
//! - **`adapter`** - REST implementations of both ports plus the backend
//!   health probe.
//! - **`app`** - Session lifecycle, form validation, entity loading, and
//!   the dashboard state machine.
//! - **`domain`** - Store-agnostic records and the pure stats aggregation.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`domain`] - User, wallet, trade and bot records; snapshot; stats
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for the backend collaborators
//! - [`adapter`] - REST adapters and health probe
//! - [`app`] - Application services and dashboard state
//! - [`cli`] - Operator-facing commands
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cerberus::app::{EntityLoader, SessionManager};
//! use cerberus::adapter::rest::{RestAuth, RestStore, TokenCell};
//! use cerberus::config::Config;
//!
//! # async fn run() -> cerberus::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let token = TokenCell::new();
//! let auth = Arc::new(RestAuth::new(&config.backend, token.clone()));
//! let store = Arc::new(RestStore::new(&config.backend, token));
//!
//! let manager = SessionManager::new(auth, store.clone());
//! if let Some(session) = manager.restore().await? {
//!     let snapshot = EntityLoader::new(store).load(&session.user_id).await;
//!     println!("{} wallets", snapshot.wallets.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
