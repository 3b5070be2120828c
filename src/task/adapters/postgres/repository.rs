//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        AssigneeId, PersistedTaskData, ReferenceId, ReferenceType, Task, TaskId, TaskPriority,
        TaskReference, TaskStatus, TaskType,
    },
    ports::{
        TaskChangeSet, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskUpdate,
    },
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn commit(&self, changes: &TaskChangeSet) -> TaskRepositoryResult<()> {
        if changes.is_empty() {
            return Ok(());
        }
        let inserts = changes
            .inserts()
            .iter()
            .map(to_new_row)
            .collect::<TaskRepositoryResult<Vec<_>>>()?;
        let updates = changes
            .updates()
            .iter()
            .map(to_versioned_row)
            .collect::<TaskRepositoryResult<Vec<_>>>()?;

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                for row in &inserts {
                    insert_task_row(tx, row)?;
                }
                for (row, expected_version) in &updates {
                    update_task_row(tx, row, *expected_version)?;
                }
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_reference(
        &self,
        reference: &TaskReference,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let reference_id = to_bigint(reference.reference_id().value())?;
        let reference_type = reference.reference_type().as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = tasks_in_insertion_order()
                .filter(tasks::reference_id.eq(reference_id))
                .filter(tasks::reference_type.eq(reference_type))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_assignees(
        &self,
        assignee_ids: &[AssigneeId],
    ) -> TaskRepositoryResult<Vec<Task>> {
        if assignee_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = assignee_ids
            .iter()
            .map(|id| to_bigint(id.value()))
            .collect::<TaskRepositoryResult<Vec<_>>>()?;
        self.run_blocking(move |connection| {
            let rows = tasks_in_insertion_order()
                .filter(tasks::assignee_id.eq_any(ids))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

/// All task rows, oldest insert first.
fn tasks_in_insertion_order() -> tasks::BoxedQuery<'static, Pg> {
    tasks::table.order(tasks::seq.asc()).into_boxed()
}

fn insert_task_row(connection: &mut PgConnection, row: &NewTaskRow) -> TaskRepositoryResult<()> {
    diesel::insert_into(tasks::table)
        .values(row)
        .execute(connection)
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                TaskRepositoryError::DuplicateTask(TaskId::from_uuid(row.id))
            }
            _ => TaskRepositoryError::persistence(err),
        })?;
    Ok(())
}

/// Writes `row` only while the stored version is still `expected_version`.
fn update_task_row(
    connection: &mut PgConnection,
    row: &NewTaskRow,
    expected_version: i64,
) -> TaskRepositoryResult<()> {
    let affected = diesel::update(
        tasks::table
            .filter(tasks::id.eq(row.id))
            .filter(tasks::version.eq(expected_version)),
    )
    .set(row)
    .execute(connection)?;
    if affected > 0 {
        return Ok(());
    }

    let task_id = TaskId::from_uuid(row.id);
    let actual = tasks::table
        .find(row.id)
        .select(tasks::version)
        .first::<i64>(connection)
        .optional()?;
    match actual {
        None => Err(TaskRepositoryError::NotFound(task_id)),
        Some(actual) => Err(TaskRepositoryError::VersionConflict {
            task_id,
            expected: from_bigint(expected_version)?,
            actual: from_bigint(actual)?,
        }),
    }
}

fn to_bigint(value: u64) -> TaskRepositoryResult<i64> {
    i64::try_from(value).map_err(TaskRepositoryError::persistence)
}

fn from_bigint(value: i64) -> TaskRepositoryResult<u64> {
    u64::try_from(value).map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &Task) -> TaskRepositoryResult<NewTaskRow> {
    Ok(NewTaskRow {
        id: task.id().into_inner(),
        reference_id: to_bigint(task.reference().reference_id().value())?,
        reference_type: task.reference().reference_type().as_str().to_owned(),
        task_type: task.task_type().as_str().to_owned(),
        assignee_id: to_bigint(task.assignee_id().value())?,
        status: task.status().as_str().to_owned(),
        priority: task.priority().map(|priority| priority.as_str().to_owned()),
        deadline: task.deadline(),
        description: task.description().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
        version: to_bigint(task.version())?,
    })
}

fn to_versioned_row(update: &TaskUpdate) -> TaskRepositoryResult<(NewTaskRow, i64)> {
    Ok((
        to_new_row(update.task())?,
        to_bigint(update.expected_version())?,
    ))
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        reference_id,
        reference_type,
        task_type,
        assignee_id,
        status,
        priority,
        deadline,
        description,
        created_at,
        updated_at,
        version,
    } = row;

    let reference = TaskReference::new(
        ReferenceId::new(from_bigint(reference_id)?).map_err(TaskRepositoryError::persistence)?,
        ReferenceType::new(reference_type).map_err(TaskRepositoryError::persistence)?,
    );
    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        reference,
        task_type: TaskType::new(task_type).map_err(TaskRepositoryError::persistence)?,
        assignee_id: AssigneeId::new(from_bigint(assignee_id)?)
            .map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?,
        priority: priority
            .as_deref()
            .map(TaskPriority::try_from)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?,
        deadline,
        description,
        created_at,
        updated_at,
        version: from_bigint(version)?,
    };
    Ok(Task::from_persisted(data))
}
