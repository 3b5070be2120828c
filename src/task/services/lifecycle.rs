//! Service layer for task creation, update, and retrieval.

use super::{
    locks::ReferenceLocks,
    requests::{CreateTaskRequest, FetchTasksByDateRequest, UpdateTaskRequest},
};
use crate::task::{
    domain::{
        AssigneeId, DateWindow, NewTask, Task, TaskDomainError, TaskId, TaskReference, TaskType,
    },
    ports::{
        CatalogError, TaskChangeSet, TaskRepository, TaskRepositoryError, TaskTypeCatalog,
        TaskUpdate,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The request falls outside the task type catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task assignment and lifecycle orchestration service.
///
/// Batch operations are all-or-nothing: every item is validated and applied
/// in memory before the batch is committed through one atomic repository
/// call.
#[derive(Clone)]
pub struct TaskLifecycleService<R, K, C>
where
    R: TaskRepository,
    K: TaskTypeCatalog,
    C: Clock + Send + Sync,
{
    pub(super) repository: Arc<R>,
    pub(super) catalog: Arc<K>,
    pub(super) clock: Arc<C>,
    pub(super) locks: Arc<ReferenceLocks>,
}

impl<R, K, C> TaskLifecycleService<R, K, C>
where
    R: TaskRepository,
    K: TaskTypeCatalog,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(repository: Arc<R>, catalog: Arc<K>, clock: Arc<C>) -> Self {
        Self {
            repository,
            catalog,
            clock,
            locks: Arc::new(ReferenceLocks::new()),
        }
    }

    /// Creates one `Assigned` task per request item, in input order.
    ///
    /// No uniqueness check is made against existing tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for malformed input,
    /// [`TaskLifecycleError::Catalog`] when an item's task type does not
    /// belong to its reference type, or [`TaskLifecycleError::Repository`]
    /// when persistence fails. Nothing is stored when any item fails.
    #[instrument(skip(self, requests), fields(items = requests.len()))]
    pub async fn create_tasks(
        &self,
        requests: Vec<CreateTaskRequest>,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = requests
            .into_iter()
            .map(|request| self.build_task(request))
            .collect::<TaskLifecycleResult<Vec<_>>>()?;

        let changes = TaskChangeSet::new().with_inserts(tasks.iter().cloned());
        self.repository.commit(&changes).await?;
        info!(created = tasks.len(), "tasks created");
        Ok(tasks)
    }

    /// Applies partial updates and returns each item's result in input order.
    ///
    /// Only the fields present in an item change. Repeated task IDs are
    /// applied in sequence to the same record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when an item names a missing
    /// task, [`TaskLifecycleError::Domain`] when an item tries to move a task
    /// out of a terminal status, or [`TaskLifecycleError::Repository`] when
    /// persistence fails. A task changed by another writer after it was read
    /// fails the batch with [`TaskRepositoryError::VersionConflict`]. Nothing
    /// is stored when any item fails.
    #[instrument(skip(self, requests), fields(items = requests.len()))]
    pub async fn update_tasks(
        &self,
        requests: Vec<UpdateTaskRequest>,
    ) -> TaskLifecycleResult<Vec<Task>> {
        // Each touched task keeps the version it was read at.
        let mut touched: Vec<(u64, Task)> = Vec::new();
        let mut results = Vec::with_capacity(requests.len());

        for request in requests {
            let UpdateTaskRequest {
                task_id,
                status,
                description,
            } = request;

            if !touched.iter().any(|(_, task)| task.id() == task_id) {
                let loaded = self.find_task_or_error(task_id).await?;
                touched.push((loaded.version(), loaded));
            }
            let task = touched
                .iter_mut()
                .find_map(|(_, task)| (task.id() == task_id).then_some(task))
                .ok_or(TaskLifecycleError::NotFound(task_id))?;

            if let Some(target) = status {
                task.transition_to(target, &*self.clock)?;
            }
            if let Some(text) = description {
                task.describe(text, &*self.clock);
            }
            results.push(task.clone());
        }

        let updated = touched.len();
        let updates = touched
            .into_iter()
            .map(|(read_version, task)| TaskUpdate::new(task, read_version));
        self.repository
            .commit(&TaskChangeSet::new().with_updates(updates))
            .await?;
        info!(updated, "tasks updated");
        Ok(results)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given ID
    /// or [`TaskLifecycleError::Repository`] when lookup fails.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(task_id).await
    }

    /// Returns the tasks of the given assignees that are relevant to the
    /// request's date window, in repository order.
    ///
    /// Cancelled and deadline-less tasks are dropped. Tasks due inside the
    /// window are kept whatever their status; overdue tasks are kept until
    /// completed; tasks due after the window are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when an assignee ID is invalid
    /// or the window starts after it ends, or
    /// [`TaskLifecycleError::Repository`] when lookup fails.
    #[instrument(
        skip(self, request),
        fields(assignees = request.assignee_ids.len(), start = %request.start_date, end = %request.end_date)
    )]
    pub async fn fetch_tasks_by_date(
        &self,
        request: FetchTasksByDateRequest,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let FetchTasksByDateRequest {
            assignee_ids,
            start_date,
            end_date,
        } = request;
        let window = DateWindow::new(start_date, end_date)?;
        let assignees = assignee_ids
            .into_iter()
            .map(AssigneeId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let candidates = self.repository.find_by_assignees(&assignees).await?;
        let considered = candidates.len();
        let relevant: Vec<Task> = candidates
            .into_iter()
            .filter(|task| window.surfaces(task))
            .collect();
        debug!(considered, relevant = relevant.len(), "filtered tasks by date");
        Ok(relevant)
    }

    pub(super) async fn find_task_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    fn build_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            reference_id,
            reference_type,
            task_type,
            assignee_id,
            priority,
            deadline,
        } = request;

        let reference = TaskReference::from_parts(reference_id, reference_type)?;
        let kind = TaskType::new(task_type)?;
        self.catalog
            .ensure_applicable(reference.reference_type(), &kind)?;

        let new_task = NewTask {
            reference,
            task_type: kind,
            assignee_id: AssigneeId::new(assignee_id)?,
            priority: Some(priority),
            deadline,
        };
        Ok(Task::new(new_task, &*self.clock))
    }
}
