//! REST adapters for the hosted data store and auth provider.
//!
//! The store speaks the PostgREST query dialect (`column=eq.value`,
//! `order=col.desc`, `limit=n`) under `/rest/v1`; the auth provider speaks
//! the GoTrue password-grant dialect under `/auth/v1`. Both attach the
//! project's publishable key, and authenticated requests add the user's
//! bearer token from a shared [`TokenCell`].

mod auth;
mod dto;
mod store;

use std::sync::Arc;

use parking_lot::RwLock;

pub use auth::RestAuth;
pub use store::RestStore;

/// Shared slot for the signed-in user's access token.
///
/// The auth adapter writes it on sign-in/sign-up/restore and clears it on
/// sign-out; the store adapter reads it per request. Mirrors the way the
/// hosted SDK shares auth state between its sub-clients.
#[derive(Clone, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.inner.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn get(&self) -> Option<String> {
        self.inner.read().clone()
    }
}
