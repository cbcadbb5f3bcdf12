//! In-memory repository implementations.
//!
//! Backing store for tests and for running the service layer without a
//! database. Cloning shares the underlying state, which lets tests keep a
//! handle on the store a service writes to.

use crate::error::AppError;
use crate::models::{Task, User};
use crate::repository::{TaskRepository, UserRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

fn lock_error(err: impl std::fmt::Display) -> AppError {
    AppError::DatabaseError(err.to_string())
}

/// Thread-safe in-memory user store keyed by email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.get(email).cloned())
    }

    async fn create(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.write().map_err(lock_error)?;
        users.insert(user.email().to_string(), user.clone());
        Ok(())
    }
}

/// Thread-safe in-memory task store; ids are assigned on create.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks. Used by tests to assert that failed
    /// operations left the store untouched.
    pub fn len(&self) -> usize {
        self.tasks.read().map(|tasks| tasks.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let id = Uuid::new_v4();
        let mut stored = task.clone();
        stored.id = Some(id);
        tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_all_by_user(&self, email: &str) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        let mut owned: Vec<Task> = tasks
            .values()
            .filter(|task| task.user_email == email)
            .cloned()
            .collect();
        owned.sort_by_key(|task| task.created_at);
        Ok(owned)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        let id = task
            .id
            .ok_or_else(|| AppError::InternalServerError("Task has no id".into()))?;
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        tasks.insert(id, task.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        tasks.remove(&id);
        Ok(())
    }
}
