use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

use taskhub::repository::memory::InMemoryUserRepository;
use taskhub::routes;
use taskhub::services::UserService;

fn build_app_service() -> UserService {
    UserService::new(Arc::new(InMemoryUserRepository::new()))
}

#[actix_rt::test]
async fn test_register_and_find_user() {
    let users = build_app_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(users))
            .service(web::scope("/v1").configure(routes::config)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/users")
        .set_json(json!({ "email": "test@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["email"], "test@example.com");
    assert!(body["data"]["createdAt"].is_string());

    let req = test::TestRequest::get()
        .uri("/v1/users/email?email=test@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User found successfully");
    assert_eq!(body["data"]["email"], "test@example.com");
}

#[actix_rt::test]
async fn test_register_duplicate_email_conflicts() {
    let users = build_app_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(users))
            .service(web::scope("/v1").configure(routes::config)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/users")
        .set_json(json!({ "email": "test@example.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/v1/users")
        .set_json(json!({ "email": "test@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email is already in use");

    // The original registration still resolves.
    let req = test::TestRequest::get()
        .uri("/v1/users/email?email=test@example.com")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_rt::test]
async fn test_register_malformed_email_is_unprocessable() {
    let users = build_app_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(users))
            .service(web::scope("/v1").configure(routes::config)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/users")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User must have a valid email");
}

#[actix_rt::test]
async fn test_find_unknown_user_is_not_found() {
    let users = build_app_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(users))
            .service(web::scope("/v1").configure(routes::config)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/users/email?email=missing@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email does not exist");
}
