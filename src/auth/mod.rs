pub mod extractors;
pub mod middleware;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use token::{generate_token, verify_token, Claims};

/// Payload for a login request. Only the email is needed; login is an
/// existence check, not a credential check.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

/// Response after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT to present as a bearer token on task endpoints.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_uses_wire_field_name() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"userEmail": "test@example.com"}"#).unwrap();
        assert_eq!(request.user_email, "test@example.com");
    }
}
