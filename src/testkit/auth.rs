//! Scriptable auth provider double.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::Session;
use crate::error::{AuthError, Error, Result};
use crate::port::{AuthProvider, SignUpRequest};

use super::domain;

/// [`AuthProvider`] double with scripted outcomes and call counters.
///
/// Defaults: sign-in and sign-up succeed with a fresh session, sign-out
/// succeeds, and no stored session exists.
#[derive(Default)]
pub struct FakeAuth {
    /// Provider message to fail sign-in with, if any.
    sign_in_rejection: RwLock<Option<String>>,
    /// Provider message to fail sign-up with, if any.
    sign_up_rejection: RwLock<Option<String>>,
    sign_out_fails: AtomicBool,
    stored: RwLock<Option<Session>>,
    sign_in_calls: AtomicUsize,
    sign_up_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
}

impl FakeAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sign-in fail with this provider message.
    pub fn reject_sign_in(&self, message: &str) {
        *self.sign_in_rejection.write() = Some(message.to_string());
    }

    /// Make sign-up fail with this provider message.
    pub fn reject_sign_up(&self, message: &str) {
        *self.sign_up_rejection.write() = Some(message.to_string());
    }

    /// Make the remote sign-out call fail.
    pub fn fail_sign_out(&self) {
        self.sign_out_fails.store(true, Ordering::SeqCst);
    }

    /// Seed a stored session for `current_session` to return.
    pub fn store_session(&self, session: Session) {
        *self.stored.write() = Some(session);
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    pub fn sign_up_calls(&self) -> usize {
        self.sign_up_calls.load(Ordering::SeqCst)
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.sign_in_rejection.read().clone() {
            return Err(Error::Auth(AuthError::Provider(message)));
        }
        let mut session = domain::session(crate::domain::UserId::new());
        session.email = email.to_string();
        *self.stored.write() = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session> {
        self.sign_up_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.sign_up_rejection.read().clone() {
            return Err(Error::Auth(AuthError::Provider(message)));
        }
        let mut session = domain::session(crate::domain::UserId::new());
        session.email = request.email.clone();
        session.username = Some(request.username.clone());
        *self.stored.write() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self, _session: &Session) -> Result<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        *self.stored.write() = None;
        if self.sign_out_fails.load(Ordering::SeqCst) {
            return Err(Error::Connection("logout endpoint unreachable".into()));
        }
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.stored.read().clone())
    }
}
