use crate::error::AppError;
use crate::validation::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user identity.
///
/// The email is validated at construction and immutable afterwards; both
/// fields are only readable through accessors. Uniqueness of the email is
/// enforced by the user service, not here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    email: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with `created_at` defaulting to the current time.
    ///
    /// Fails with `AppError::ValidationError` when the email is empty or
    /// does not match the email format.
    pub fn new(email: impl Into<String>) -> Result<Self, AppError> {
        Self::with_created_at(email, Utc::now())
    }

    /// Creates a user with an explicit creation timestamp, e.g. when
    /// rebuilding from a persisted record.
    pub fn with_created_at(
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let email = email.into();
        if email.is_empty() || !is_valid_email(&email) {
            return Err(AppError::ValidationError(
                "User must have a valid email".into(),
            ));
        }
        Ok(Self { email, created_at })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_construction_defaults_created_at() {
        let before = Utc::now();
        let user = User::new("test@example.com").unwrap();
        let after = Utc::now();

        assert_eq!(user.email(), "test@example.com");
        assert!(user.created_at() >= before && user.created_at() <= after);
    }

    #[test]
    fn test_user_construction_rejects_empty_email() {
        match User::new("") {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "User must have a valid email");
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_user_construction_rejects_malformed_email() {
        assert!(User::new("not-an-email").is_err());
        assert!(User::new("missing@domain").is_err());
        assert!(User::new("two@@example.com").is_err());
    }

    #[test]
    fn test_user_with_explicit_created_at() {
        let ts = Utc::now() - chrono::Duration::days(3);
        let user = User::with_created_at("old@example.com", ts).unwrap();
        assert_eq!(user.created_at(), ts);
    }
}
