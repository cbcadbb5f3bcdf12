use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Liveness check
///
/// Reports the service name and the current server time. Kept outside the
/// versioned API scope so probes need no token.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "taskhub",
        "timestamp": Utc::now()
    }))
}
