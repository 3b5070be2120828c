//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The reference identifier is zero or exceeds the persisted range.
    #[error("invalid reference id {0}, expected a positive integer")]
    InvalidReferenceId(u64),

    /// The assignee identifier is zero or exceeds the persisted range.
    #[error("invalid assignee id {0}, expected a positive integer")]
    InvalidAssigneeId(u64),

    /// The reference type key is empty or contains unsupported characters.
    #[error("malformed reference type '{0}', expected an upper snake case key")]
    MalformedReferenceType(String),

    /// The task type key is empty or contains unsupported characters.
    #[error("malformed task type '{0}', expected an upper snake case key")]
    MalformedTaskType(String),

    /// The requested status change is not permitted from the current status.
    #[error("task {task_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// The comment author is empty after trimming.
    #[error("comment author must not be empty")]
    EmptyCommentAuthor,

    /// The comment body is empty after trimming.
    #[error("comment body must not be empty")]
    EmptyCommentBody,

    /// The query window starts after it ends.
    #[error("date window start {start} is after end {end}")]
    InvalidDateWindow {
        /// Requested window start.
        start: DateTime<Utc>,
        /// Requested window end.
        end: DateTime<Utc>,
    },
}

/// Error returned while parsing task statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
