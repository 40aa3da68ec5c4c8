//! Diagnostic checks.

use std::path::Path;

use crate::adapter::health::HealthProbe;
use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Validate the configuration file without touching the network.
pub fn config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());

    let config = Config::load(path)?;

    output::success("Configuration file is valid");
    output::field("Backend", &config.backend.base_url);
    output::field("Health URL", &config.health.base_url);
    output::field("Log level", &config.logging.level);
    println!();
    Ok(())
}

/// Probe the backend health endpoint once.
pub async fn health<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let probe = HealthProbe::new(config.health.base_url.clone());

    println!("Probing {} ...", config.health.base_url);

    match probe.probe().await {
        Ok(health) => {
            output::success(&format!(
                "{} {} ({})",
                health.service, health.version, health.status
            ));
            output::field("Timestamp", &health.timestamp);
            Ok(())
        }
        Err(err) => {
            output::error("Connection Failed");
            Err(err)
        }
    }
}
