use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{NewTask, TaskUpdate},
    services::TaskService,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

/// Creates a new task.
///
/// The owner email in the body must belong to a registered user; the task
/// always starts incomplete.
///
/// ## Request Body:
/// - `userEmail`: email of the owning user (required).
/// - `title`: title of the task (required).
/// - `description` (optional): defaults to an empty string.
///
/// ## Responses:
/// - `201 Created`: Returns the persisted task, including its id.
/// - `400 Bad Request`: If `userEmail` or `title` is missing or empty.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no user is registered for `userEmail`.
#[post("")]
pub async fn create_task(
    service: web::Data<TaskService>,
    task_data: web::Json<NewTask>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service.create_task(task_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Task created successfully",
        "data": task
    })))
}

/// Lists all tasks of a user, ordered by creation time ascending.
///
/// ## Responses:
/// - `200 OK`: Returns the user's tasks; an empty array when there are none.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no user is registered for the email.
#[get("/user/{user_email}")]
pub async fn find_all_by_user(
    service: web::Data<TaskService>,
    user_email: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = service.find_all_by_user(&user_email.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Tasks retrieved successfully",
        "data": tasks
    })))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the task.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no task exists with the given ID.
#[get("/{id}")]
pub async fn get_task(
    service: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service.find_by_id(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task retrieved successfully",
        "data": task
    })))
}

/// Applies a partial update to a task.
///
/// Fields absent from the body are left unchanged. When `completed` is
/// present, the completion timestamp follows it: set on true, cleared on
/// false.
///
/// ## Responses:
/// - `200 OK`: Returns the updated task.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no task exists with the given ID.
#[put("/{id}")]
pub async fn update_task(
    service: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskUpdate>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service
        .update_task(task_id.into_inner(), task_data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task updated successfully",
        "data": task
    })))
}

/// Deletes a task by its ID.
///
/// ## Responses:
/// - `200 OK`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no task exists with the given ID.
#[delete("/{id}")]
pub async fn delete_task(
    service: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    service.delete_task(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
