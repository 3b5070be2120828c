//! Free-text comments attached to a task.

use super::{CommentId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Immutable comment left on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    id: CommentId,
    task_id: TaskId,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Task the comment belongs to.
    pub task_id: TaskId,
    /// Persisted author.
    pub author: String,
    /// Persisted comment text.
    pub body: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskComment {
    /// Creates a comment stamped with the current clock time.
    ///
    /// Author and body are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentAuthor`] or
    /// [`TaskDomainError::EmptyCommentBody`] when either field is blank.
    pub fn new(
        task_id: TaskId,
        author: impl Into<String>,
        body: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let author_raw = author.into();
        let author_trimmed = author_raw.trim();
        if author_trimmed.is_empty() {
            return Err(TaskDomainError::EmptyCommentAuthor);
        }
        let body_raw = body.into();
        let body_trimmed = body_raw.trim();
        if body_trimmed.is_empty() {
            return Err(TaskDomainError::EmptyCommentBody);
        }

        Ok(Self {
            id: CommentId::new(),
            task_id,
            author: author_trimmed.to_owned(),
            body: body_trimmed.to_owned(),
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            author: data.author,
            body: data.body,
            created_at: data.created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task the comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
