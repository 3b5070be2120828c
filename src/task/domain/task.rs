//! Task aggregate root and its lifecycle rules.

use super::{
    AssigneeId, TaskDomainError, TaskId, TaskPriority, TaskReference, TaskStatus, TaskType,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Description stamped on tasks created through bulk creation.
pub const NEW_TASK_DESCRIPTION: &str = "New task created.";

/// Description stamped on tasks touched by reference reassignment, both the
/// superseded record and its replacement.
pub const REASSIGNED_TASK_DESCRIPTION: &str = "Task reassigned.";

/// Version stamped on a freshly assigned task.
pub const INITIAL_TASK_VERSION: u64 = 1;

/// Task aggregate root.
///
/// Every mutation bumps `version`, which stores use to reject writes based
/// on a stale read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    reference: TaskReference,
    task_type: TaskType,
    assignee_id: AssigneeId,
    status: TaskStatus,
    priority: Option<TaskPriority>,
    deadline: Option<DateTime<Utc>>,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

/// Parameter object for assigning a fresh task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Entity the task serves.
    pub reference: TaskReference,
    /// Kind of work.
    pub task_type: TaskType,
    /// Worker responsible for the task.
    pub assignee_id: AssigneeId,
    /// Urgency, if known.
    pub priority: Option<TaskPriority>,
    /// Point in time by which the task should be actioned.
    pub deadline: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted reference entity.
    pub reference: TaskReference,
    /// Persisted task type.
    pub task_type: TaskType,
    /// Persisted assignee.
    pub assignee_id: AssigneeId,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority, if any.
    pub priority: Option<TaskPriority>,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted free-text annotation.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted optimistic concurrency version.
    pub version: u64,
}

impl Task {
    /// Creates an `Assigned` task annotated as newly created.
    #[must_use]
    pub fn new(new_task: NewTask, clock: &impl Clock) -> Self {
        Self::assign(new_task, NEW_TASK_DESCRIPTION, clock)
    }

    /// Creates the `Assigned` replacement for a reassigned reference.
    ///
    /// Deadline and priority are carried forward from `superseded` when a
    /// previous task of the same type was cancelled.
    #[must_use]
    pub fn replacement(
        reference: TaskReference,
        task_type: TaskType,
        assignee_id: AssigneeId,
        superseded: Option<&Self>,
        clock: &impl Clock,
    ) -> Self {
        let new_task = NewTask {
            reference,
            task_type,
            assignee_id,
            priority: superseded.and_then(Self::priority),
            deadline: superseded.and_then(Self::deadline),
        };
        Self::assign(new_task, REASSIGNED_TASK_DESCRIPTION, clock)
    }

    fn assign(new_task: NewTask, description: &str, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let NewTask {
            reference,
            task_type,
            assignee_id,
            priority,
            deadline,
        } = new_task;

        Self {
            id: TaskId::new(),
            reference,
            task_type,
            assignee_id,
            status: TaskStatus::Assigned,
            priority,
            deadline,
            description: description.to_owned(),
            created_at: timestamp,
            updated_at: timestamp,
            version: INITIAL_TASK_VERSION,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            reference: data.reference,
            task_type: data.task_type,
            assignee_id: data.assignee_id,
            status: data.status,
            priority: data.priority,
            deadline: data.deadline,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
            version: data.version,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the reference entity the task serves.
    #[must_use]
    pub const fn reference(&self) -> &TaskReference {
        &self.reference
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> &TaskType {
        &self.task_type
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> AssigneeId {
        self.assignee_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the deadline, if set.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the free-text annotation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the optimistic concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` while the task is neither completed nor cancelled.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Moves the task to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// terminal and `target` differs from its current status. The task is
    /// left unchanged on error.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the free-text annotation.
    pub fn describe(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.touch(clock);
    }

    /// Cancels a live task because its reference was reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// already terminal.
    pub fn supersede(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if !self.is_live() {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: TaskStatus::Cancelled,
            });
        }
        self.status = TaskStatus::Cancelled;
        self.description = REASSIGNED_TASK_DESCRIPTION.to_owned();
        self.touch(clock);
        Ok(())
    }

    /// Stamps the current clock time and moves to the next version.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.version += 1;
    }
}
