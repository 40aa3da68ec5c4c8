//! User profile record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Profile record from the `users` collection.
///
/// Owned by the data store; the dashboard reads it and never writes back
/// except for the initial insert on sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// First letter of the username, uppercased, for the avatar badge.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: UserId::new(),
            username: name.into(),
            email: "trader@example.com".into(),
            is_verified: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn initial_uppercases_first_letter() {
        assert_eq!(user("degen").initial(), 'D');
    }

    #[test]
    fn initial_falls_back_for_empty_username() {
        assert_eq!(user("").initial(), 'U');
    }
}
