//! Backend health probe.
//!
//! A single informational GET against the backend base URL. Any network or
//! decode failure is reported as a connection failure; there is no retry.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Health payload reported by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// One-shot health probe against the configured backend.
pub struct HealthProbe {
    http: reqwest::Client,
    base_url: String,
}

impl HealthProbe {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http, base_url }
    }

    /// Fetch the health payload.
    pub async fn probe(&self) -> Result<HealthStatus> {
        debug!(url = %self.base_url, "probing backend health");

        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Connection(format!(
                "backend returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| Error::Connection(e.to_string()))
    }
}
