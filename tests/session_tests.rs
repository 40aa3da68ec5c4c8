//! Tests for the session lifecycle against scripted provider doubles.

use std::sync::Arc;

use cerberus::app::SessionManager;
use cerberus::error::{AuthError, Error};
use cerberus::port::SignUpRequest;
use cerberus::testkit::auth::FakeAuth;
use cerberus::testkit::domain as build;
use cerberus::testkit::store::{FailureSwitches, InMemoryStore};

fn manager(auth: Arc<FakeAuth>, store: Arc<InMemoryStore>) -> SessionManager {
    SessionManager::new(auth, store)
}

fn sign_up_request() -> SignUpRequest {
    SignUpRequest {
        username: "degen".into(),
        email: "trader@example.com".into(),
        password: "Abcdef1!".into(),
    }
}

#[tokio::test]
async fn sign_in_returns_a_session() {
    let auth = Arc::new(FakeAuth::new());
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth.clone(), store);

    let session = manager
        .sign_in("trader@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.email, "trader@example.com");
    assert_eq!(auth.sign_in_calls(), 1);
}

#[tokio::test]
async fn sign_in_failure_carries_the_provider_message_verbatim() {
    let auth = Arc::new(FakeAuth::new());
    auth.reject_sign_in("Invalid login credentials");
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth, store);

    let err = manager
        .sign_in("trader@example.com", "wrong")
        .await
        .unwrap_err();

    match err {
        Error::Auth(AuthError::Provider(message)) => {
            assert_eq!(message, "Invalid login credentials");
        }
        other => panic!("expected provider auth error, got {other}"),
    }
}

#[tokio::test]
async fn sign_up_writes_a_profile_record() {
    let auth = Arc::new(FakeAuth::new());
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth, store.clone());

    let outcome = manager.sign_up(&sign_up_request()).await.unwrap();

    assert!(outcome.profile_warning.is_none());
    let users = store.inserted_users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "degen");
    assert_eq!(users[0].id, outcome.session.user_id);
    assert!(!users[0].is_verified);
}

#[tokio::test]
async fn profile_insert_failure_does_not_fail_sign_up() {
    let auth = Arc::new(FakeAuth::new());
    let store = Arc::new(InMemoryStore::new());
    store.set_failures(FailureSwitches {
        insert: true,
        ..Default::default()
    });
    let manager = manager(auth, store.clone());

    let outcome = manager.sign_up(&sign_up_request()).await.unwrap();

    // Identity exists; the write failure is a warning, not a failure.
    assert!(outcome.profile_warning.is_some());
    assert_eq!(store.insert_calls(), 1);
    assert!(store.inserted_users().is_empty());
}

#[tokio::test]
async fn sign_up_rejection_issues_no_profile_insert() {
    let auth = Arc::new(FakeAuth::new());
    auth.reject_sign_up("User already registered");
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth, store.clone());

    let err = manager.sign_up(&sign_up_request()).await.unwrap_err();

    assert!(matches!(err, Error::Auth(AuthError::Provider(_))));
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn sign_out_succeeds_locally_even_when_remote_fails() {
    let auth = Arc::new(FakeAuth::new());
    auth.fail_sign_out();
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth.clone(), store);

    let session = build::session(cerberus::domain::UserId::new());
    // Returns unit: a remote failure is logged, not surfaced.
    manager.sign_out(&session).await;

    assert_eq!(auth.sign_out_calls(), 1);
    assert!(manager.restore().await.unwrap().is_none());
}

#[tokio::test]
async fn restore_yields_unauthenticated_without_a_stored_session() {
    let auth = Arc::new(FakeAuth::new());
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth, store);

    assert!(manager.restore().await.unwrap().is_none());
}

#[tokio::test]
async fn restore_returns_the_stored_session() {
    let auth = Arc::new(FakeAuth::new());
    let user_id = cerberus::domain::UserId::new();
    auth.store_session(build::session(user_id));
    let store = Arc::new(InMemoryStore::new());
    let manager = manager(auth, store);

    let restored = manager.restore().await.unwrap().unwrap();
    assert_eq!(restored.user_id, user_id);
}
