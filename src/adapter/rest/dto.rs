//! Wire types for the auth and store endpoints.

use chrono::{Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{Session, UserId};

/// Successful token grant response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Absent when the provider requires email confirmation first.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Seconds until the access token expires.
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: Option<AuthUser>,
}

/// Identity block embedded in token responses.
#[derive(Debug, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub username: Option<String>,
}

impl TokenResponse {
    /// Convert into a [`Session`], if the grant actually carried one.
    pub fn into_session(self, fallback_email: &str) -> Option<Session> {
        let access_token = self.access_token?;
        let user = self.user?;
        let expires_at = self
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));

        Some(Session {
            user_id: UserId::from_uuid(user.id),
            email: user.email.unwrap_or_else(|| fallback_email.to_string()),
            username: user.user_metadata.and_then(|m| m.username),
            access_token,
            refresh_token: self.refresh_token,
            expires_at,
        })
    }
}

/// Error body shapes the provider uses, oldest first.
#[derive(Debug, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorBody {
    /// The human-readable message, whichever field carried it.
    pub fn into_message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.message)
    }
}

/// Error body returned by the record store.
#[derive(Debug, Deserialize)]
pub struct StoreErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}
