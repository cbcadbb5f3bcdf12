use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A task record owned by a user, referenced by email.
///
/// The constructor performs no validation: required-field and owner
/// existence checks belong to the task service, and repositories rebuild
/// persisted rows through the plain struct. `id` is `None` until the
/// persistence layer assigns one on creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned by the store on creation; absent beforehand.
    pub id: Option<Uuid>,
    /// Email of the owning user. An association, not an ownership pointer.
    pub user_email: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Set iff `completed` is true; maintained by the task service.
    pub completed_at: Option<DateTime<Utc>>,
    /// Set once at construction, never changed afterwards.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds an unpersisted task: not completed, `created_at` = now.
    pub fn new(
        user_email: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_email: user_email.into(),
            title: title.into(),
            description: description.into(),
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a task. `description` defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub user_email: String,
    pub title: String,
    pub description: Option<String>,
}

/// Partial update for a task.
///
/// `None` means "leave the field unchanged"; an explicit value, including
/// an empty string or `false`, is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation_defaults() {
        let task = Task::new("test@example.com", "Write report", "");

        assert_eq!(task.user_email, "test@example.com");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "");
        assert!(task.id.is_none());
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task::new("test@example.com", "T", "d");
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["userEmail"], "test@example.com");
        assert!(value["completedAt"].is_null());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_task_update_distinguishes_missing_from_empty() {
        let patch: TaskUpdate = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some(""));
        assert!(patch.description.is_none());
        assert!(patch.completed.is_none());
    }
}
