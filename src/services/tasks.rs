//! Task use cases: create, read, update, delete, and per-user listing.
//!
//! This service owns every task invariant: required fields at creation,
//! owner-must-exist, and the completion timestamp rule. Entities stay
//! permissive and repositories only store.

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskUpdate};
use crate::repository::TaskRepository;
use crate::services::UserService;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Application service for the `Task` entity.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
    users: UserService,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>, users: UserService) -> Self {
        Self { repository, users }
    }

    /// Creates a task for an existing user.
    ///
    /// Fails with `BadRequest` when the owner email or title is empty and
    /// with `NotFound("User does not exist")` when no user is registered
    /// for the email; in that case the task repository is never touched.
    pub async fn create_task(&self, input: NewTask) -> Result<Task, AppError> {
        if input.user_email.is_empty() {
            return Err(AppError::BadRequest("User email is required".into()));
        }
        if input.title.is_empty() {
            return Err(AppError::BadRequest("Task title is required".into()));
        }

        self.users
            .find_user(&input.user_email)
            .await
            .map_err(owner_missing)?;

        let task = Task::new(
            input.user_email,
            input.title,
            input.description.unwrap_or_default(),
        );
        self.repository.create(&task).await
    }

    /// Finds a task by id, failing with `NotFound` when absent.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Task, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Deletes a task by id.
    ///
    /// Existence is checked first, so deleting an unknown id fails with
    /// `NotFound` without reaching the destructive call. Two round trips,
    /// kept for simplicity.
    pub async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id).await?;
        self.repository.delete(id).await
    }

    /// Applies a partial update to an existing task.
    ///
    /// Only fields present in the patch change. When `completed` is
    /// present it also drives `completed_at`: true stamps the current
    /// time, false clears it; an absent `completed` leaves both untouched.
    pub async fn update_task(&self, id: Uuid, patch: TaskUpdate) -> Result<Task, AppError> {
        let mut task = self.find_by_id(id).await?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
            task.completed_at = if completed { Some(Utc::now()) } else { None };
        }

        self.repository.update(&task).await
    }

    /// Lists all tasks owned by a user, ordered by creation time ascending.
    ///
    /// The owner must exist; a user without tasks yields an empty list.
    pub async fn find_all_by_user(&self, user_email: &str) -> Result<Vec<Task>, AppError> {
        self.users.find_user(user_email).await.map_err(owner_missing)?;
        self.repository.find_all_by_user(user_email).await
    }
}

/// Re-labels a user-service lookup miss for task operations; any other
/// failure propagates unchanged.
fn owner_missing(err: AppError) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::NotFound("User does not exist".into()),
        other => other,
    }
}
