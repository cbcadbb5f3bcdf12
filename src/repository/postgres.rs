//! Postgres repository implementations backed by sqlx.
//!
//! All statements are parameterized and return the affected row where the
//! caller needs it (`RETURNING`), so the service layer always sees exactly
//! what was stored. Driver errors convert into `AppError` via `?`.

use crate::error::AppError;
use crate::models::{Task, User};
use crate::repository::{TaskRepository, UserRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, user_email, title, description, completed, completed_at, created_at";

/// User repository over a `users` table keyed by email.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT email, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (email, created_at) VALUES ($1, $2)")
            .bind(user.email())
            .bind(user.created_at())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Task repository over a `tasks` table; the database assigns task ids.
#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        let stored = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (user_email, title, description, completed, completed_at, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&task.user_email)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.completed_at)
        .bind(task.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_all_by_user(&self, email: &str) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE user_email = $1 ORDER BY created_at ASC",
            TASK_COLUMNS
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        let id = task
            .id
            .ok_or_else(|| AppError::InternalServerError("Task has no id".into()))?;

        let stored = sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks
             SET title = $1, description = $2, completed = $3, completed_at = $4
             WHERE id = $5
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.completed_at)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
