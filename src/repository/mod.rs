//! Persistence contracts consumed by the service layer.
//!
//! Services depend on these traits only; the Postgres implementations back
//! the running server and the in-memory ones back the tests. Both are
//! injected explicitly, so business logic never constructs its own store.

pub mod memory;
pub mod postgres;

use crate::error::AppError;
use crate::models::{Task, User};
use async_trait::async_trait;
use uuid::Uuid;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up a user by email. `None` when no user is registered for it.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persists a new user. Uniqueness is checked by the user service
    /// before this is called.
    async fn create(&self, user: &User) -> Result<(), AppError>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task and returns it with the identifier the store
    /// assigned.
    async fn create(&self, task: &Task) -> Result<Task, AppError>;

    /// Looks up a task by id. `None` when the task does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError>;

    /// Returns all tasks owned by the given email, ordered by creation
    /// time ascending.
    async fn find_all_by_user(&self, email: &str) -> Result<Vec<Task>, AppError>;

    /// Persists changes to an existing task and returns the stored result.
    async fn update(&self, task: &Task) -> Result<Task, AppError>;

    /// Deletes a task by id.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}
