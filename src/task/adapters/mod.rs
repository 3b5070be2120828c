//! Adapter implementations for task lifecycle ports.

pub mod catalog;
pub mod memory;
pub mod postgres;
pub mod view;

pub use catalog::{CatalogConfigError, StaticTaskTypeCatalog};
pub use view::{TaskCommentView, TaskView, to_task_views};
