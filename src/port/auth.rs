//! Session provider port.

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::Result;

/// Sign-up parameters forwarded to the provider.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Credential-based session provider.
///
/// Failures carry the provider's human-readable message as an
/// [`AuthError`](crate::error::AuthError); nothing here panics or retries.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Create a new identity and return its first session.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session>;

    /// Invalidate the current session with the provider.
    async fn sign_out(&self, session: &Session) -> Result<()>;

    /// Look up a previously established session, if one is still valid.
    async fn current_session(&self) -> Result<Option<Session>>;
}
