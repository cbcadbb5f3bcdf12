//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Every failure raised by entity construction, the service
//! layer, or a repository is expressed as one of its variants, so the rest
//! of the code can propagate errors with `?` and a single mapping decides
//! the HTTP representation.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into JSON responses of the shape `{"message": ...}`.
//! `From` impls for `sqlx::Error` and `jsonwebtoken::errors::Error` cover
//! the two external libraries whose errors cross this boundary.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur within the application.
///
/// Each variant carries a message detailing the issue; the variant alone
/// determines the HTTP status class, the message is passed through verbatim.
#[derive(Debug)]
pub enum AppError {
    /// A malformed or incomplete request (HTTP 400), e.g. a missing email
    /// or an empty task title.
    BadRequest(String),
    /// A missing or invalid bearer token (HTTP 401).
    Unauthorized(String),
    /// A referenced entity (user or task) does not exist (HTTP 404).
    NotFound(String),
    /// A uniqueness violation, currently only a duplicate user email
    /// (HTTP 409).
    Conflict(String),
    /// Failed input validation at entity construction (HTTP 422).
    ValidationError(String),
    /// An error originating from the persistence layer (HTTP 500).
    DatabaseError(String),
    /// Any other unexpected server-side failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This is the single kind-to-status mapping table for the whole
/// application; handlers never choose error status codes themselves.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "message": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "message": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "message": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "message": msg
            })),
            // Persistence failures surface as generic internal errors.
            AppError::DatabaseError(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `sqlx::Error::RowNotFound` maps to `AppError::NotFound`; everything else
/// becomes `AppError::DatabaseError` and propagates unchanged to the caller.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
///
/// Used when JWT verification fails.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::BadRequest("userEmail is required".into());
        let response = error.error_response();
        assert_eq!(response.status(), 400);

        let error = AppError::Unauthorized("Token missing".into());
        let response = error.error_response();
        assert_eq!(response.status(), 401);

        let error = AppError::NotFound("Task not found".into());
        let response = error.error_response();
        assert_eq!(response.status(), 404);

        let error = AppError::Conflict("Email is already in use".into());
        let response = error.error_response();
        assert_eq!(response.status(), 409);

        let error = AppError::ValidationError("User must have a valid email".into());
        let response = error.error_response();
        assert_eq!(response.status(), 422);

        let error = AppError::DatabaseError("connection reset".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        match error {
            AppError::NotFound(msg) => assert_eq!(msg, "Record not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
