//! Repository port for task persistence and lookup.

use crate::task::domain::{AssigneeId, Task, TaskId, TaskReference};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Conditional write of a modified task.
///
/// The write only lands while the stored task is still at
/// `expected_version`, the version the modification was based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    task: Task,
    expected_version: u64,
}

impl TaskUpdate {
    /// Pairs a modified task with the version it was read at.
    #[must_use]
    pub const fn new(task: Task, expected_version: u64) -> Self {
        Self {
            task,
            expected_version,
        }
    }

    /// Returns the modified task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the version the stored task must still have.
    #[must_use]
    pub const fn expected_version(&self) -> u64 {
        self.expected_version
    }
}

/// Batch of inserts and updates that must be persisted atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChangeSet {
    inserts: Vec<Task>,
    updates: Vec<TaskUpdate>,
}

impl TaskChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues new tasks for insertion.
    #[must_use]
    pub fn with_inserts(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.inserts.extend(tasks);
        self
    }

    /// Queues conditional updates of existing tasks.
    #[must_use]
    pub fn with_updates(mut self, updates: impl IntoIterator<Item = TaskUpdate>) -> Self {
        self.updates.extend(updates);
        self
    }

    /// Returns tasks queued for insertion.
    #[must_use]
    pub fn inserts(&self) -> &[Task] {
        &self.inserts
    }

    /// Returns queued updates.
    #[must_use]
    pub fn updates(&self) -> &[TaskUpdate] {
        &self.updates
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty()
    }
}

/// Task persistence contract.
///
/// Iteration order of list lookups must be stable: implementations return
/// tasks in the order they were first stored.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Applies every insert and update in `changes` as one unit.
    ///
    /// Either all changes become visible or none do. Updates are applied
    /// after inserts, so an update may target a task inserted by the same
    /// change set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] for a clashing insert,
    /// [`TaskRepositoryError::NotFound`] for an update to a missing task, or
    /// [`TaskRepositoryError::VersionConflict`] when a task changed since it
    /// was read. The store is left untouched in every case.
    async fn commit(&self, changes: &TaskChangeSet) -> TaskRepositoryResult<()>;

    /// Finds a task by internal task identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task, in any status, attached to `reference`.
    async fn find_by_reference(
        &self,
        reference: &TaskReference,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task currently assigned to any of `assignee_ids`.
    async fn find_by_assignees(
        &self,
        assignee_ids: &[AssigneeId],
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task was modified after the update's snapshot was read.
    #[error("task {task_id} changed concurrently: expected version {expected}, found {actual}")]
    VersionConflict {
        /// Task whose write was rejected.
        task_id: TaskId,
        /// Version the update was based on.
        expected: u64,
        /// Version currently stored.
        actual: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
