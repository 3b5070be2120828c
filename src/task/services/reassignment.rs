//! Reference-based reassignment.
//!
//! For every task type the catalog lists for a reference type, live tasks of
//! that type are cancelled and exactly one replacement is created for the
//! new assignee. Completed tasks are never touched, and tasks of types the
//! catalog does not list for the reference are left alone.

use super::{
    TaskLifecycleService, lifecycle::TaskLifecycleResult, requests::AssignByReferenceRequest,
};
use crate::task::{
    domain::{AssigneeId, Task, TaskDomainError, TaskReference, TaskStatus, TaskType},
    ports::{TaskChangeSet, TaskRepository, TaskTypeCatalog, TaskUpdate},
};
use mockable::Clock;
use std::fmt;
use tracing::{info, instrument};

/// Outcome of a reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentReceipt {
    reference: TaskReference,
    assignee_id: AssigneeId,
    cancelled: Vec<Task>,
    created: Vec<Task>,
}

impl ReassignmentReceipt {
    /// Returns the reassigned reference entity.
    #[must_use]
    pub const fn reference(&self) -> &TaskReference {
        &self.reference
    }

    /// Returns the new assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> AssigneeId {
        self.assignee_id
    }

    /// Returns the superseded tasks in their cancelled state.
    #[must_use]
    pub fn cancelled(&self) -> &[Task] {
        &self.cancelled
    }

    /// Returns the replacement tasks, one per applicable task type in catalog
    /// order.
    #[must_use]
    pub fn created(&self) -> &[Task] {
        &self.created
    }

    /// Returns the confirmation message for callers.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReassignmentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tasks assigned successfully for reference {}",
            self.reference.reference_id()
        )
    }
}

impl<R, K, C> TaskLifecycleService<R, K, C>
where
    R: TaskRepository,
    K: TaskTypeCatalog,
    C: Clock + Send + Sync,
{
    /// Hands every applicable task of a reference entity to a new assignee.
    ///
    /// Runs under a per-reference lock and commits cancellations and
    /// replacements atomically, so at most one live task per applicable type
    /// survives even under concurrent calls. Cancellations are conditional on
    /// the versions read, so a task updated in between fails the whole
    /// reassignment instead of being overwritten. An empty reference is not
    /// an error: fresh tasks are created for every applicable type.
    ///
    /// # Errors
    ///
    /// Returns `TaskLifecycleError::Domain` for malformed input,
    /// `TaskLifecycleError::Catalog` when the reference type has no catalog
    /// entry, or `TaskLifecycleError::Repository` when persistence fails or a
    /// superseded task changed concurrently.
    #[instrument(
        skip(self, request),
        fields(reference_id = request.reference_id, reference_type = %request.reference_type, assignee_id = request.assignee_id)
    )]
    pub async fn assign_by_reference(
        &self,
        request: AssignByReferenceRequest,
    ) -> TaskLifecycleResult<ReassignmentReceipt> {
        let AssignByReferenceRequest {
            reference_id,
            reference_type,
            assignee_id,
        } = request;
        let reference = TaskReference::from_parts(reference_id, reference_type)?;
        let assignee = AssigneeId::new(assignee_id)?;
        let applicable = self.catalog.require(reference.reference_type())?.to_vec();

        let _guard = self.locks.acquire(&reference).await;
        let existing = self.repository.find_by_reference(&reference).await?;
        let plan = plan_reassignment(&reference, assignee, &applicable, &existing, &*self.clock)?;

        let changes = TaskChangeSet::new()
            .with_updates(plan.cancelled.iter().cloned())
            .with_inserts(plan.created.iter().cloned());
        self.repository.commit(&changes).await?;
        info!(
            cancelled = plan.cancelled.len(),
            created = plan.created.len(),
            "reference reassigned"
        );

        Ok(ReassignmentReceipt {
            reference,
            assignee_id: assignee,
            cancelled: plan
                .cancelled
                .into_iter()
                .map(|update| update.task().clone())
                .collect(),
            created: plan.created,
        })
    }
}

#[derive(Debug)]
struct ReassignmentPlan {
    cancelled: Vec<TaskUpdate>,
    created: Vec<Task>,
}

/// Computes supersessions and replacements without touching storage.
fn plan_reassignment(
    reference: &TaskReference,
    assignee_id: AssigneeId,
    applicable: &[TaskType],
    existing: &[Task],
    clock: &impl Clock,
) -> Result<ReassignmentPlan, TaskDomainError> {
    let mut cancelled = Vec::new();
    let mut created = Vec::with_capacity(applicable.len());

    for task_type in applicable {
        let mut candidates = Vec::new();
        for task in existing
            .iter()
            .filter(|task| task.task_type() == task_type && task.status() != TaskStatus::Completed)
        {
            let mut candidate = task.clone();
            if candidate.is_live() {
                candidate.supersede(clock)?;
                cancelled.push(TaskUpdate::new(candidate.clone(), task.version()));
            }
            candidates.push(candidate);
        }

        created.push(Task::replacement(
            reference.clone(),
            task_type.clone(),
            assignee_id,
            most_recent(&candidates),
            clock,
        ));
    }

    Ok(ReassignmentPlan { cancelled, created })
}

/// Picks the latest-created task; ties go to the later one in the slice.
fn most_recent(tasks: &[Task]) -> Option<&Task> {
    tasks.iter().max_by_key(|task| task.created_at())
}
