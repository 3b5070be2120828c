//! Application services for task assignment and lifecycle orchestration.

mod comment;
mod lifecycle;
mod locks;
mod reassignment;
mod requests;

pub use comment::{TaskCommentService, TaskCommentServiceError, TaskCommentServiceResult};
pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use reassignment::ReassignmentReceipt;
pub use requests::{
    AddCommentRequest, AssignByReferenceRequest, CreateTaskRequest, FetchTasksByDateRequest,
    UpdateTaskRequest,
};
