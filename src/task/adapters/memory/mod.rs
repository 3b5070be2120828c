//! In-memory adapters for tests and single-process deployments.

mod comment;
mod task;

pub use comment::InMemoryTaskCommentRepository;
pub use task::InMemoryTaskRepository;
