//! In-memory task repository.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{AssigneeId, Task, TaskId, TaskReference},
    ports::{TaskChangeSet, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Lookups return tasks in the order they were first stored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
    reference_index: HashMap<TaskReference, Vec<TaskId>>,
}

impl InMemoryTaskState {
    fn insert(&mut self, task: &Task) {
        self.insertion_order.push(task.id());
        self.reference_index
            .entry(task.reference().clone())
            .or_default()
            .push(task.id());
        self.tasks.insert(task.id(), task.clone());
    }

    fn ordered(&self, ids: &[TaskId]) -> Vec<Task> {
        ids.iter()
            .filter_map(|id| self.tasks.get(id).cloned())
            .collect()
    }

    /// Rejects the change set without mutating anything if any insert
    /// clashes, any update targets an unknown task, or any update was based on
    /// a version other than the one it would overwrite.
    fn check(&self, changes: &TaskChangeSet) -> TaskRepositoryResult<()> {
        let mut versions: HashMap<TaskId, u64> = HashMap::new();
        for task in changes.inserts() {
            if self.tasks.contains_key(&task.id())
                || versions.insert(task.id(), task.version()).is_some()
            {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
        }
        for update in changes.updates() {
            let task = update.task();
            let current = versions
                .get(&task.id())
                .copied()
                .or_else(|| self.tasks.get(&task.id()).map(Task::version))
                .ok_or(TaskRepositoryError::NotFound(task.id()))?;
            if current != update.expected_version() {
                return Err(TaskRepositoryError::VersionConflict {
                    task_id: task.id(),
                    expected: update.expected_version(),
                    actual: current,
                });
            }
            versions.insert(task.id(), task.version());
        }
        Ok(())
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn commit(&self, changes: &TaskChangeSet) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.check(changes)?;

        for task in changes.inserts() {
            state.insert(task);
        }
        for update in changes.updates() {
            let task = update.task();
            state.tasks.insert(task.id(), task.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_reference(
        &self,
        reference: &TaskReference,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .reference_index
            .get(reference)
            .map(|ids| state.ordered(ids))
            .unwrap_or_default())
    }

    async fn find_by_assignees(
        &self,
        assignee_ids: &[AssigneeId],
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let wanted: HashSet<AssigneeId> = assignee_ids.iter().copied().collect();
        let matching = state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| wanted.contains(&task.assignee_id()))
            .cloned()
            .collect();
        Ok(matching)
    }
}
