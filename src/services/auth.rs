//! Login-by-email: a pure existence check that issues a bearer token.

use crate::auth::token::generate_token;
use crate::error::AppError;
use crate::services::UserService;

/// Application service for authentication.
///
/// There is no password or credential check: a login succeeds for any
/// registered email and yields a one-hour JWT carrying that email.
#[derive(Clone)]
pub struct AuthService {
    users: UserService,
}

impl AuthService {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Logs a user in by email and returns a signed token.
    ///
    /// Fails with `BadRequest` when the email is empty and with
    /// `NotFound("User not found")` when no user is registered for it.
    pub async fn login(&self, user_email: &str) -> Result<String, AppError> {
        if user_email.is_empty() {
            return Err(AppError::BadRequest("userEmail is required".into()));
        }

        let user = self.users.find_user(user_email).await.map_err(|err| match err {
            AppError::NotFound(_) => AppError::NotFound("User not found".into()),
            other => other,
        })?;

        generate_token(user.email())
    }
}
