//! Repository port for task comments.

use crate::task::domain::{CommentId, TaskComment, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type TaskCommentRepositoryResult<T> = Result<T, TaskCommentRepositoryError>;

/// Append-only comment persistence contract.
#[async_trait]
pub trait TaskCommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentRepositoryError::DuplicateComment`] when the
    /// comment ID already exists.
    async fn store(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()>;

    /// Returns comments left on `task_id`, oldest first.
    async fn list_for_task(&self, task_id: TaskId) -> TaskCommentRepositoryResult<Vec<TaskComment>>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskCommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskCommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
