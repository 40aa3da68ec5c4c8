//! GoTrue auth provider adapter.
//!
//! Sessions persist in a JSON cache file under the user config directory,
//! standing in for the hosted SDK's local storage. `current_session` reads
//! the cache back and refreshes an expired token with the refresh grant;
//! it never prompts.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::json;
use tracing::{debug, warn};

use super::dto::{AuthErrorBody, TokenResponse};
use super::TokenCell;
use crate::config::BackendConfig;
use crate::domain::Session;
use crate::error::{AuthError, Error, Result};
use crate::port::{AuthProvider, SignUpRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Auth client against the hosted session provider.
pub struct RestAuth {
    http: HttpClient,
    auth_url: String,
    anon_key: String,
    token: TokenCell,
    cache_path: PathBuf,
}

impl RestAuth {
    #[must_use]
    pub fn new(config: &BackendConfig, token: TokenCell) -> Self {
        Self::with_cache_path(config, token, default_cache_path())
    }

    /// Construct with an explicit session cache location.
    #[must_use]
    pub fn with_cache_path(config: &BackendConfig, token: TokenCell, cache_path: PathBuf) -> Self {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        Self {
            http,
            auth_url: format!("{}/auth/v1", config.base_url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
            token,
            cache_path,
        }
    }

    async fn token_grant(&self, path: &str, body: serde_json::Value) -> Result<Session> {
        let url = format!("{}{}", self.auth_url, path);
        let fallback_email = body
            .get("email")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let grant: TokenResponse = response.json().await?;
        let session = grant.into_session(&fallback_email).ok_or_else(|| {
            Error::Auth(AuthError::Provider(
                "Account created; confirm your email before signing in".to_string(),
            ))
        })?;

        self.remember(&session);
        Ok(session)
    }

    /// Map a non-success response to an [`AuthError`] carrying the
    /// provider's message verbatim.
    async fn auth_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let message = response
            .json::<AuthErrorBody>()
            .await
            .ok()
            .and_then(AuthErrorBody::into_message)
            .unwrap_or_else(|| format!("authentication failed (HTTP {status})"));
        Error::Auth(AuthError::Provider(message))
    }

    /// Persist the session and publish its token to the shared cell.
    fn remember(&self, session: &Session) {
        self.token.set(session.access_token.clone());
        if let Some(parent) = self.cache_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(session) {
            Ok(body) => {
                if let Err(err) = std::fs::write(&self.cache_path, body) {
                    warn!(error = %err, "failed to persist session cache");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize session"),
        }
    }

    fn forget(&self) {
        self.token.clear();
        let _ = std::fs::remove_file(&self.cache_path);
    }

    fn cached_session(&self) -> Option<Session> {
        let body = std::fs::read_to_string(&self.cache_path).ok()?;
        match serde_json::from_str(&body) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(error = %err, "discarding unreadable session cache");
                None
            }
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        debug!("refreshing expired session");
        self.token_grant(
            "/token?grant_type=refresh_token",
            json!({ "refresh_token": refresh_token }),
        )
        .await
    }
}

#[async_trait]
impl AuthProvider for RestAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        self.token_grant(
            "/token?grant_type=password",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session> {
        self.token_grant(
            "/signup",
            json!({
                "email": request.email,
                "password": request.password,
                "data": { "username": request.username },
            }),
        )
        .await
    }

    async fn sign_out(&self, session: &Session) -> Result<()> {
        let url = format!("{}/logout", self.auth_url);
        let result = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await;

        // Local state goes first so a failed remote call cannot leave a
        // signed-out user with a live cache.
        self.forget();

        let response = result?;
        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.cached_session() else {
            return Ok(None);
        };

        if !session.is_expired() {
            self.token.set(session.access_token.clone());
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.clone() else {
            self.forget();
            return Ok(None);
        };

        match self.refresh(&refresh_token).await {
            Ok(fresh) => Ok(Some(fresh)),
            Err(err) => {
                warn!(error = %err, "session refresh failed");
                self.forget();
                Ok(None)
            }
        }
    }
}

/// Default session cache: `<config dir>/cerberus/session.json`.
fn default_cache_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cerberus")
        .join("session.json")
}
