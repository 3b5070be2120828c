//! Service layer for task comments.

use super::requests::AddCommentRequest;
use crate::task::{
    domain::{TaskComment, TaskDomainError, TaskId},
    ports::{TaskCommentRepository, TaskCommentRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum TaskCommentServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Comment persistence failed.
    #[error(transparent)]
    Comments(#[from] TaskCommentRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for comment service operations.
pub type TaskCommentServiceResult<T> = Result<T, TaskCommentServiceError>;

/// Comment orchestration service.
#[derive(Clone)]
pub struct TaskCommentService<R, M, C>
where
    R: TaskRepository,
    M: TaskCommentRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    comments: Arc<M>,
    clock: Arc<C>,
}

impl<R, M, C> TaskCommentService<R, M, C>
where
    R: TaskRepository,
    M: TaskCommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, comments: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            comments,
            clock,
        }
    }

    /// Leaves a comment on an existing task.
    ///
    /// Terminal tasks accept comments too.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentServiceError::NotFound`] when the task does not
    /// exist, [`TaskCommentServiceError::Domain`] when author or body is
    /// blank, or a repository error when persistence fails.
    #[instrument(skip(self, request), fields(task_id = %request.task_id))]
    pub async fn add_comment(
        &self,
        request: AddCommentRequest,
    ) -> TaskCommentServiceResult<TaskComment> {
        let AddCommentRequest {
            task_id,
            author,
            body,
        } = request;
        self.ensure_task_exists(task_id).await?;

        let comment = TaskComment::new(task_id, author, body, &*self.clock)?;
        self.comments.store(&comment).await?;
        info!(comment_id = %comment.id(), "comment added");
        Ok(comment)
    }

    /// Lists the comments on a task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentServiceError::NotFound`] when the task does not
    /// exist or a repository error when lookup fails.
    #[instrument(skip(self))]
    pub async fn list_comments(&self, task_id: TaskId) -> TaskCommentServiceResult<Vec<TaskComment>> {
        self.ensure_task_exists(task_id).await?;
        Ok(self.comments.list_for_task(task_id).await?)
    }

    async fn ensure_task_exists(&self, task_id: TaskId) -> TaskCommentServiceResult<()> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .map(|_| ())
            .ok_or(TaskCommentServiceError::NotFound(task_id))
    }
}
