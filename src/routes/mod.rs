pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use crate::auth::AuthMiddleware;
use actix_web::web;

/// Mounts the resource scopes. Task routes sit behind the bearer-token
/// middleware; user and auth routes are public.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(users::create_user)
            .service(users::find_user),
    )
    .service(web::scope("/auth").service(auth::login))
    .service(
        web::scope("/tasks")
            .wrap(AuthMiddleware)
            .service(tasks::create_task)
            // "/user/{userEmail}" must register before "/{id}"
            .service(tasks::find_all_by_user)
            .service(tasks::get_task)
            .service(tasks::update_task)
            .service(tasks::delete_task),
    );
}
