//! Session lifecycle management.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::Session;
use crate::error::Result;
use crate::port::{AuthProvider, NewUser, RecordStore, SignUpRequest};

/// Result of a successful sign-up.
///
/// The provider identity always exists once this is returned; the profile
/// row may have failed to write, in which case `profile_warning` carries
/// the store's message for the form to display.
#[derive(Debug, Clone)]
pub struct SignUpOutcome {
    pub session: Session,
    pub profile_warning: Option<String>,
}

/// Owns authentication state transitions against the session provider.
///
/// Form validation happens before any call lands here; every method talks
/// to the network (or the provider's session storage).
pub struct SessionManager {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn RecordStore>,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn RecordStore>) -> Self {
        Self { auth, store }
    }

    /// Exchange credentials for a session.
    ///
    /// Provider failures (bad credentials, unverified account) surface
    /// verbatim as [`AuthError`](crate::error::AuthError).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.auth.sign_in(email, password).await?;
        info!(user_id = %session.user_id, "signed in");
        Ok(session)
    }

    /// Create a provider identity, then mirror it into the `users`
    /// collection.
    ///
    /// The identity is authoritative: if the profile insert fails after the
    /// identity exists, sign-up still succeeds and the failure is carried
    /// as a warning.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome> {
        let session = self.auth.sign_up(request).await?;
        info!(user_id = %session.user_id, "identity created");

        let record = NewUser {
            id: session.user_id,
            username: request.username.clone(),
            email: request.email.clone(),
            is_verified: false,
        };

        let profile_warning = match self.store.insert_user(&record).await {
            Ok(()) => None,
            Err(err) => {
                warn!(user_id = %session.user_id, error = %err, "profile insert failed");
                Some(err.to_string())
            }
        };

        Ok(SignUpOutcome {
            session,
            profile_warning,
        })
    }

    /// Invalidate the session.
    ///
    /// Local state is considered cleared regardless of whether the remote
    /// invalidation call succeeds; a remote failure is logged and dropped.
    pub async fn sign_out(&self, session: &Session) {
        if let Err(err) = self.auth.sign_out(session).await {
            warn!(error = %err, "remote sign-out failed, clearing local session anyway");
        }
        info!("signed out");
    }

    /// Look up an existing valid session on startup.
    pub async fn restore(&self) -> Result<Option<Session>> {
        self.auth.current_session().await
    }
}
