use crate::{error::AppError, services::UserService};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

/// Query parameters for the user lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub email: Option<String>,
}

/// Register a new user
///
/// Creates a user for an email not yet in use.
///
/// ## Responses:
/// - `201 Created`: Returns the created user.
/// - `400 Bad Request`: If the email field is missing or empty.
/// - `409 Conflict`: If a user already exists for the email.
/// - `422 Unprocessable Entity`: If the email is malformed.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    user_data: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    if user_data.email.is_empty() {
        return Err(AppError::BadRequest("Email is required".into()));
    }

    let user = service.create_user(&user_data.email).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully",
        "data": user
    })))
}

/// Find an existing user by email
///
/// ## Query Parameters:
/// - `email`: the email to look up.
///
/// ## Responses:
/// - `200 OK`: Returns the user.
/// - `400 Bad Request`: If the email parameter is missing or empty.
/// - `404 Not Found`: If no user is registered for the email.
#[get("/email")]
pub async fn find_user(
    service: web::Data<UserService>,
    query: web::Query<UserQuery>,
) -> Result<impl Responder, AppError> {
    let email = query.email.as_deref().unwrap_or_default();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".into()));
    }

    let user = service.find_user(email).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User found successfully",
        "data": user
    })))
}
