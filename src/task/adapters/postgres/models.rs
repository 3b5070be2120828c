//! Diesel row models for task persistence.

use super::schema::{task_comments, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// External reference entity identifier.
    pub reference_id: i64,
    /// External reference entity classification.
    pub reference_type: String,
    /// Kind of work.
    pub task_type: String,
    /// Current assignee.
    pub assignee_id: i64,
    /// Lifecycle status.
    pub status: String,
    /// Optional urgency marker.
    pub priority: Option<String>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Free-text annotation.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency version.
    pub version: i64,
}

/// Insert and update model for task records.
///
/// `None` fields are written as `NULL` on update so clearing a value is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// External reference entity identifier.
    pub reference_id: i64,
    /// External reference entity classification.
    pub reference_type: String,
    /// Kind of work.
    pub task_type: String,
    /// Current assignee.
    pub assignee_id: i64,
    /// Lifecycle status.
    pub status: String,
    /// Optional urgency marker.
    pub priority: Option<String>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Free-text annotation.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency version.
    pub version: i64,
}

/// Query result row for task comments.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskCommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Task the comment belongs to.
    pub task_id: uuid::Uuid,
    /// Comment author.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task comments.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_comments)]
pub struct NewTaskCommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Task the comment belongs to.
    pub task_id: uuid::Uuid,
    /// Comment author.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
