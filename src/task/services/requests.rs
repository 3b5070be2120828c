//! Request payloads accepted by task services.
//!
//! Requests carry raw caller values; services validate them into domain
//! types.

use crate::task::domain::{TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};

/// One item of a bulk task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) reference_id: u64,
    pub(super) reference_type: String,
    pub(super) task_type: String,
    pub(super) assignee_id: u64,
    pub(super) priority: TaskPriority,
    pub(super) deadline: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields and no deadline.
    #[must_use]
    pub fn new(
        reference_id: u64,
        reference_type: impl Into<String>,
        task_type: impl Into<String>,
        assignee_id: u64,
        priority: TaskPriority,
    ) -> Self {
        Self {
            reference_id,
            reference_type: reference_type.into(),
            task_type: task_type.into(),
            assignee_id,
            priority,
            deadline: None,
        }
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// One item of a bulk task update. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) status: Option<TaskStatus>,
    pub(super) description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            status: None,
            description: None,
        }
    }

    /// Sets the target status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Reassigns every applicable task of a reference entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignByReferenceRequest {
    pub(super) reference_id: u64,
    pub(super) reference_type: String,
    pub(super) assignee_id: u64,
}

impl AssignByReferenceRequest {
    /// Creates a reassignment request.
    #[must_use]
    pub fn new(reference_id: u64, reference_type: impl Into<String>, assignee_id: u64) -> Self {
        Self {
            reference_id,
            reference_type: reference_type.into(),
            assignee_id,
        }
    }
}

/// Retrieves the tasks of a set of assignees relevant to a date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTasksByDateRequest {
    pub(super) assignee_ids: Vec<u64>,
    pub(super) start_date: DateTime<Utc>,
    pub(super) end_date: DateTime<Utc>,
}

impl FetchTasksByDateRequest {
    /// Creates a fetch request over the inclusive `[start_date, end_date]`
    /// window.
    #[must_use]
    pub fn new(
        assignee_ids: impl IntoIterator<Item = u64>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            assignee_ids: assignee_ids.into_iter().collect(),
            start_date,
            end_date,
        }
    }
}

/// Leaves a comment on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    pub(super) task_id: TaskId,
    pub(super) author: String,
    pub(super) body: String,
}

impl AddCommentRequest {
    /// Creates a comment request.
    #[must_use]
    pub fn new(task_id: TaskId, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            task_id,
            author: author.into(),
            body: body.into(),
        }
    }
}
