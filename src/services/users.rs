//! User use cases: registration and lookup.

use crate::error::AppError;
use crate::models::User;
use crate::repository::UserRepository;
use std::sync::Arc;

/// Application service for the `User` entity.
///
/// Enforces one-user-per-email; the entity itself only validates format.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new user for an email not yet in use.
    ///
    /// Fails with `Conflict` when a user already exists for the email, or
    /// with `ValidationError` when the email is malformed.
    pub async fn create_user(&self, email: &str) -> Result<User, AppError> {
        let existing = self.repository.find_by_email(email).await?;
        if existing.is_some() {
            return Err(AppError::Conflict("Email is already in use".into()));
        }

        let user = User::new(email)?;
        self.repository.create(&user).await?;

        Ok(user)
    }

    /// Finds an existing user by email.
    ///
    /// Fails with `NotFound` when no user is registered for the email.
    pub async fn find_user(&self, email: &str) -> Result<User, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Email does not exist".into()))
    }
}
