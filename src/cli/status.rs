//! Session and backend status.

use std::path::Path;

use crate::adapter::health::HealthProbe;
use crate::app::SessionManager;
use crate::cli::{connect, output};
use crate::config::Config;
use crate::error::Result;

/// Show session state and the backend health card.
pub async fn show<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();
    let backend = connect(&config);
    let manager = SessionManager::new(backend.auth, backend.store);

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Session");
    match manager.restore().await? {
        Some(session) => {
            output::success(&format!("Signed in as {}", session.display_name()));
            output::field("Email", &session.email);
        }
        None => {
            output::note("Not signed in.");
        }
    }

    output::section("Backend");
    let probe = HealthProbe::new(config.health.base_url.clone());
    match probe.probe().await {
        Ok(health) => {
            output::success("Connected");
            output::field("Status", &health.status);
            output::field("Service", &health.service);
            output::field("Version", &health.version);
        }
        Err(err) => {
            output::error("Connection Failed");
            output::note(&err.to_string());
        }
    }

    println!();
    Ok(())
}
