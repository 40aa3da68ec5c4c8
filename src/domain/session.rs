//! Authenticated session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Ephemeral proof of authentication binding this client to a user.
///
/// Created on successful sign-in/sign-up or restored from the provider's
/// storage; destroyed on sign-out. The `user_id` is the sole input to the
/// entity loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    /// Username echoed back from the provider's sign-up metadata, when known.
    #[serde(default)]
    pub username: Option<String>,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the access token has passed its expiry.
    ///
    /// Sessions without an expiry are treated as live; the provider is the
    /// authority and will reject a dead token on first use.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }

    /// Display name: username when known, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}
