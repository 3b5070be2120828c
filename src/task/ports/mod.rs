//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod catalog;
pub mod comment;
pub mod repository;

pub use catalog::{CatalogError, TaskTypeCatalog};
pub use comment::{TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult};
pub use repository::{
    TaskChangeSet, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskUpdate,
};
