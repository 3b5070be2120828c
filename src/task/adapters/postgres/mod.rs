//! `PostgreSQL` adapters for task lifecycle persistence.
//!
//! Multi-row writes run inside a single transaction. The schema lives in the
//! crate's `migrations/` directory.

mod comment_repository;
mod models;
mod repository;
mod schema;

pub use comment_repository::PostgresTaskCommentRepository;
pub use repository::{PostgresTaskRepository, TaskPgPool};
