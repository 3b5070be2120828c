//! In-memory comment repository.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CommentId, TaskComment, TaskId},
    ports::{TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskCommentRepository {
    state: Arc<RwLock<InMemoryCommentState>>,
}

#[derive(Debug, Default)]
struct InMemoryCommentState {
    ids: HashSet<CommentId>,
    by_task: HashMap<TaskId, Vec<TaskComment>>,
}

impl InMemoryTaskCommentRepository {
    /// Creates an empty in-memory comment repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskCommentRepository for InMemoryTaskCommentRepository {
    async fn store(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskCommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.ids.insert(comment.id()) {
            return Err(TaskCommentRepositoryError::DuplicateComment(comment.id()));
        }
        state
            .by_task
            .entry(comment.task_id())
            .or_default()
            .push(comment.clone());
        Ok(())
    }

    async fn list_for_task(&self, task_id: TaskId) -> TaskCommentRepositoryResult<Vec<TaskComment>> {
        let state = self.state.read().map_err(|err| {
            TaskCommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.by_task.get(&task_id).cloned().unwrap_or_default())
    }
}
