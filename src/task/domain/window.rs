//! Date windows used to surface tasks for assignees.

use super::{Task, TaskDomainError, TaskStatus};
use chrono::{DateTime, Utc};

/// Inclusive `[start, end]` range of deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    /// Creates a window from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDateWindow`] when `start` is after
    /// `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        if start > end {
            return Err(TaskDomainError::InvalidDateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `task` is still relevant inside this window.
    ///
    /// Cancelled tasks and tasks without a deadline never surface. A task
    /// due inside the window surfaces whatever its status; a task due before
    /// the window surfaces only while it is not completed. Nothing due after
    /// `end` surfaces.
    #[must_use]
    pub fn surfaces(&self, task: &Task) -> bool {
        if task.status() == TaskStatus::Cancelled {
            return false;
        }
        let Some(deadline) = task.deadline() else {
            return false;
        };
        if deadline > self.end {
            return false;
        }
        deadline >= self.start || task.status() != TaskStatus::Completed
    }
}
