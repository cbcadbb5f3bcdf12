use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use taskhub::config::Config;
use taskhub::repository::postgres::{PgTaskRepository, PgUserRepository};
use taskhub::routes;
use taskhub::services::{AuthService, TaskService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    // Explicit wiring: repositories into services, services into app data.
    let user_service = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
    let task_service = TaskService::new(
        Arc::new(PgTaskRepository::new(pool.clone())),
        user_service.clone(),
    );
    let auth_service = AuthService::new(user_service.clone());

    let addr = config.bind_addr();
    log::info!("Starting taskhub server at http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(task_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(web::scope("/v1").configure(routes::config))
    })
    .bind(addr)?
    .run()
    .await
}
