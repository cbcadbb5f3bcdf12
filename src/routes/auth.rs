use crate::{
    auth::{AuthResponse, LoginRequest},
    error::AppError,
    services::AuthService,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Login by email
///
/// Issues a one-hour bearer token for a registered email. There is no
/// password: login succeeds for any existing user.
///
/// ## Responses:
/// - `200 OK`: Returns `{"token": "<jwt>"}`.
/// - `400 Bad Request`: If `userEmail` is empty.
/// - `404 Not Found`: If no user is registered for the email.
#[post("/login")]
pub async fn login(
    service: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let token = service.login(&login_data.user_email).await?;

    Ok(HttpResponse::Ok().json(AuthResponse { token }))
}
