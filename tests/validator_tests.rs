//! Tests for the credential form validation gate.

use cerberus::app::validate::{
    password_strength, validate_registration, validate_sign_in, RegistrationForm, StrengthLabel,
};
use cerberus::error::ValidationError;
use cerberus::testkit::auth::FakeAuth;

fn form(password: &str, confirm: &str) -> RegistrationForm {
    RegistrationForm {
        username: "degen".into(),
        email: "trader@example.com".into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn strength_is_bounded_and_monotone() {
    // Each password adds one more satisfied criterion than the last.
    let ladder = ["", "a", "abcdefgh", "Abcdefgh", "Abcdefg1", "Abcdef1!"];
    let mut last = 0;
    for password in ladder {
        let score = password_strength(password);
        assert!(score <= 5, "score out of range for {password:?}");
        assert!(
            score >= last,
            "score decreased from {last} at {password:?} ({score})"
        );
        last = score;
    }
    assert_eq!(last, 5);
}

#[test]
fn abc_scores_one_and_reads_weak() {
    let score = password_strength("abc");
    assert_eq!(score, 1);
    assert_eq!(StrengthLabel::from_score(score), StrengthLabel::Weak);
    assert!(validate_registration(&form("abc", "abc")).is_err());
}

#[test]
fn strong_password_scores_five_and_passes() {
    let score = password_strength("Abcdef1!");
    assert_eq!(score, 5);
    assert_eq!(StrengthLabel::from_score(score), StrengthLabel::Strong);
    assert!(validate_registration(&form("Abcdef1!", "Abcdef1!")).is_ok());
}

#[test]
fn score_three_is_the_submit_threshold() {
    // Three criteria met: length, lowercase, digit.
    let password = "abcdefg1";
    assert_eq!(password_strength(password), 3);
    assert!(validate_registration(&form(password, password)).is_ok());

    // Two criteria met: lowercase, digit.
    let password = "abc1";
    assert_eq!(password_strength(password), 2);
    assert_eq!(
        validate_registration(&form(password, password)),
        Err(ValidationError::WeakPassword { score: 2 })
    );
}

#[test]
fn mismatched_confirmation_blocks_submission() {
    assert_eq!(
        validate_registration(&form("Abcdef1!", "Abcdef1?")),
        Err(ValidationError::PasswordMismatch)
    );
}

#[test]
fn short_username_is_rejected() {
    let mut f = form("Abcdef1!", "Abcdef1!");
    f.username = "ab".into();
    assert_eq!(
        validate_registration(&f),
        Err(ValidationError::UsernameTooShort { min: 3 })
    );
}

#[test]
fn sign_in_requires_both_fields() {
    assert_eq!(
        validate_sign_in("", "hunter2"),
        Err(ValidationError::MissingField { field: "email" })
    );
    assert_eq!(
        validate_sign_in("trader@example.com", ""),
        Err(ValidationError::MissingField { field: "password" })
    );
    assert!(validate_sign_in("trader@example.com", "hunter2").is_ok());
}

#[test]
fn sign_in_applies_no_strength_check() {
    // "abc" scores 1, far below the registration threshold.
    assert!(validate_sign_in("trader@example.com", "abc").is_ok());
}

/// Drive the submit sequence the form uses: validate, then call the
/// provider only on success.
#[tokio::test]
async fn rejected_registration_never_reaches_the_provider() {
    let auth = FakeAuth::new();
    let form = form("abc", "abc");

    if validate_registration(&form).is_ok() {
        use cerberus::port::{AuthProvider, SignUpRequest};
        let _ = auth
            .sign_up(&SignUpRequest {
                username: form.username.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
            })
            .await;
    }

    assert_eq!(auth.sign_up_calls(), 0);
}
