//! Then steps for reassignment BDD scenarios.

use super::world::{ReassignmentWorld, run_async};
use rstest_bdd_macros::then;
use workforce::task::{
    domain::{Task, TaskStatus},
    ports::{CatalogError, TaskRepository},
    services::TaskLifecycleError,
};

#[then("the reassignment confirms reference {reference_id:u64}")]
fn reassignment_confirms(world: &ReassignmentWorld, reference_id: u64) -> Result<(), eyre::Report> {
    let expected = format!("Tasks assigned successfully for reference {reference_id}");
    let message = world.receipt()?.message();
    eyre::ensure!(message == expected, "unexpected message: {message}");
    Ok(())
}

#[then("the number of cancelled tasks is {count:usize}")]
fn cancelled_count(world: &ReassignmentWorld, count: usize) -> Result<(), eyre::Report> {
    let cancelled = world.receipt()?.cancelled().len();
    eyre::ensure!(cancelled == count, "expected {count} cancelled, found {cancelled}");
    Ok(())
}

#[then(r#"the live tasks are "{task_types}" assigned to {assignee_id:u64}"#)]
fn live_tasks_are(
    world: &ReassignmentWorld,
    task_types: String,
    assignee_id: u64,
) -> Result<(), eyre::Report> {
    let reference = world.receipt()?.reference().clone();
    let stored = run_async(world.repository.find_by_reference(&reference))?;
    let live: Vec<&Task> = stored.iter().filter(|task| task.is_live()).collect();

    let mut actual: Vec<&str> = live.iter().map(|task| task.task_type().as_str()).collect();
    actual.sort_unstable();
    let expected: Vec<&str> = task_types.split(',').map(str::trim).collect();
    eyre::ensure!(actual == expected, "live task types {actual:?}, expected {expected:?}");
    eyre::ensure!(
        live.iter()
            .all(|task| task.assignee_id().value() == assignee_id),
        "live tasks are not all assigned to {assignee_id}"
    );
    Ok(())
}

#[then(r#"the original task has status "{status}" and assignee {assignee_id:u64}"#)]
fn original_task_is(
    world: &ReassignmentWorld,
    status: String,
    assignee_id: u64,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let original = world
        .original_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let stored = run_async(world.service.find_by_id(original.id()))?;
    eyre::ensure!(
        stored.status() == expected,
        "expected status {expected}, found {}",
        stored.status()
    );
    eyre::ensure!(
        stored.assignee_id().value() == assignee_id,
        "expected assignee {assignee_id}, found {}",
        stored.assignee_id()
    );
    Ok(())
}

#[then("the reassignment fails with an invalid reference type error")]
fn reassignment_fails_with_invalid_reference_type(
    world: &ReassignmentWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_reassignment
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reassignment result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Catalog(CatalogError::InvalidReferenceType(_)))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidReferenceType error, got {result:?}"
        ));
    }
    Ok(())
}
