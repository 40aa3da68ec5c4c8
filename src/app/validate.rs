//! Credential form validation.
//!
//! Everything here resolves locally; a form that fails validation never
//! produces a provider request.

use crate::error::ValidationError;

/// Minimum strength score accepted at registration.
pub const MIN_STRENGTH: u8 = 3;

/// Minimum username length accepted at registration.
pub const MIN_USERNAME_LEN: usize = 3;

/// Score a password on the 5-point scale.
///
/// One point each for: length of at least 8, an uppercase letter, a
/// lowercase letter, a digit, and a non-alphanumeric character. The submit
/// gate depends on this exact scoring, so the criteria are not negotiable.
#[must_use]
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0;
    if password.chars().count() >= 8 {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 1;
    }
    strength
}

/// Display label for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLabel::Weak,
            2 | 3 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Submitted registration form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate sign-in credentials: both fields present, no strength check.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "email" });
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField { field: "password" });
    }
    Ok(())
}

/// Validate a registration form before it reaches the provider.
///
/// Mismatched confirmation is reported before strength, matching the order
/// the form checks them in.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.username.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "username" });
    }
    if form.username.trim().len() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort {
            min: MIN_USERNAME_LEN,
        });
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "email" });
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    let score = password_strength(&form.password);
    if score < MIN_STRENGTH {
        return Err(ValidationError::WeakPassword { score });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_scores_each_criterion_once() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 1); // lowercase only
        assert_eq!(password_strength("abcdefgh"), 2); // + length
        assert_eq!(password_strength("Abcdefgh"), 3); // + uppercase
        assert_eq!(password_strength("Abcdefg1"), 4); // + digit
        assert_eq!(password_strength("Abcdef1!"), 5); // + symbol
    }

    #[test]
    fn strength_is_capped_at_five() {
        assert_eq!(password_strength("Aa1!Aa1!Aa1!Aa1!"), 5);
    }

    #[test]
    fn labels_follow_score_bands() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::Strong);
    }

    #[test]
    fn mismatch_is_reported_before_weakness() {
        let form = RegistrationForm {
            username: "degen".into(),
            email: "trader@example.com".into(),
            password: "abc".into(),
            confirm_password: "abd".into(),
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn weak_password_is_rejected_with_score() {
        let form = RegistrationForm {
            username: "degen".into(),
            email: "trader@example.com".into(),
            password: "abc".into(),
            confirm_password: "abc".into(),
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::WeakPassword { score: 1 })
        );
    }
}
