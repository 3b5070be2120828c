//! `PostgreSQL` repository implementation for task comments.

use super::{
    TaskPgPool,
    models::{NewTaskCommentRow, TaskCommentRow},
    schema::task_comments,
};
use crate::task::{
    domain::{CommentId, PersistedCommentData, TaskComment, TaskId},
    ports::{TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskCommentRepository {
    pool: TaskPgPool,
}

impl PostgresTaskCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskCommentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskCommentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(TaskCommentRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskCommentRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskCommentRepository for PostgresTaskCommentRepository {
    async fn store(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()> {
        let comment_id = comment.id();
        let new_row = NewTaskCommentRow {
            id: comment.id().into_inner(),
            task_id: comment.task_id().into_inner(),
            author: comment.author().to_owned(),
            body: comment.body().to_owned(),
            created_at: comment.created_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(task_comments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskCommentRepositoryError::DuplicateComment(comment_id)
                    }
                    _ => TaskCommentRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_task(&self, task_id: TaskId) -> TaskCommentRepositoryResult<Vec<TaskComment>> {
        self.run_blocking(move |connection| {
            let rows = task_comments::table
                .filter(task_comments::task_id.eq(task_id.into_inner()))
                .order((task_comments::created_at.asc(), task_comments::id.asc()))
                .select(TaskCommentRow::as_select())
                .load::<TaskCommentRow>(connection)
                .map_err(TaskCommentRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_comment).collect())
        })
        .await
    }
}

fn row_to_comment(row: TaskCommentRow) -> TaskComment {
    TaskComment::from_persisted(PersistedCommentData {
        id: CommentId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        author: row.author,
        body: row.body,
        created_at: row.created_at,
    })
}
