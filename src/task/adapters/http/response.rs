//! Wire representations returned by the task routes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::task::domain::Task;

/// Confirmation text returned after a successful delete.
pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully";

/// Serialized task.
///
/// Timestamps are RFC 3339 in UTC with a `Z` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description, `null` when unset.
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Update timestamp, `null` until the first update.
    #[serde(serialize_with = "serialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|value| value.as_str().to_owned()),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    /// Confirmation text.
    pub message: &'static str,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            message: TASK_DELETED_MESSAGE,
        }
    }
}

fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

fn serialize_optional_timestamp<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => serialize_timestamp(timestamp, serializer),
        None => serializer.serialize_none(),
    }
}
