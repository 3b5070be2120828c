//! Domain model for workforce task assignment and lifecycle.
//!
//! The task domain models task records attached to external reference
//! entities, their status rules, reassignment supersession, and temporal
//! relevance while keeping all infrastructure concerns outside of the
//! domain boundary.

mod comment;
mod error;
mod ids;
mod keys;
mod priority;
mod reference;
mod status;
mod task;
mod window;

pub use comment::{PersistedCommentData, TaskComment};
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{AssigneeId, CommentId, ReferenceId, TaskId};
pub use keys::{ReferenceType, TaskType};
pub use priority::TaskPriority;
pub use reference::TaskReference;
pub use status::TaskStatus;
pub use task::{
    INITIAL_TASK_VERSION, NEW_TASK_DESCRIPTION, NewTask, PersistedTaskData,
    REASSIGNED_TASK_DESCRIPTION, Task,
};
pub use window::DateWindow;
