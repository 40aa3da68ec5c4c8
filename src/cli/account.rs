//! Sign-in, sign-up and sign-out commands.

use std::path::Path;

use dialoguer::{Input, Password};

use crate::app::validate::{
    self, password_strength, RegistrationForm, StrengthLabel, MIN_STRENGTH,
};
use crate::app::SessionManager;
use crate::cli::{connect, output};
use crate::config::Config;
use crate::error::{Error, Result, ValidationError};

/// Sign in with an email and password.
pub async fn login<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();
    let backend = connect(&config);
    let manager = SessionManager::new(backend.auth, backend.store);

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Sign in");

    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = Password::new().with_prompt("  Password").interact()?;

    validate::validate_sign_in(&email, &password)?;

    let session = manager.sign_in(&email, &password).await?;

    println!();
    output::success(&format!("Signed in as {}", session.display_name()));
    output::note("Run `cerberus dashboard` to see your account.");
    Ok(())
}

/// Create a new account.
pub async fn register<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();
    let backend = connect(&config);
    let manager = SessionManager::new(backend.auth, backend.store);

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Create account");

    let username: String = Input::new().with_prompt("  Username").interact_text()?;
    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = Password::new().with_prompt("  Password").interact()?;

    let score = password_strength(&password);
    show_strength(score);
    if score < MIN_STRENGTH {
        return Err(Error::Validation(ValidationError::WeakPassword { score }));
    }

    let confirm_password = Password::new().with_prompt("  Confirm password").interact()?;

    let form = RegistrationForm {
        username,
        email,
        password,
        confirm_password,
    };
    validate::validate_registration(&form)?;

    let outcome = manager
        .sign_up(&crate::port::SignUpRequest {
            username: form.username,
            email: form.email,
            password: form.password,
        })
        .await?;

    println!();
    output::success(&format!(
        "Account created for {}",
        outcome.session.display_name()
    ));
    if let Some(warning) = outcome.profile_warning {
        output::warning(&format!("Profile record not saved: {warning}"));
    }
    output::note("Run `cerberus dashboard` to see your account.");
    Ok(())
}

/// Sign out and clear the cached session.
pub async fn logout<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();
    let backend = connect(&config);
    let manager = SessionManager::new(backend.auth, backend.store);

    match manager.restore().await? {
        Some(session) => {
            manager.sign_out(&session).await;
            output::success("Signed out");
        }
        None => {
            output::note("Not signed in.");
        }
    }
    Ok(())
}

fn show_strength(score: u8) {
    let label = StrengthLabel::from_score(score);
    let rendered = match label {
        StrengthLabel::Weak => output::negative(label),
        StrengthLabel::Medium => output::highlight(label),
        StrengthLabel::Strong => output::positive(label),
    };
    println!("  Password strength: {rendered}");
}
