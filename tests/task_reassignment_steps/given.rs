//! Given steps for reassignment BDD scenarios.

use super::world::{ReassignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use workforce::task::{
    domain::{TaskPriority, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

#[given(
    r#"a "{reference_type}" reference {reference_id:u64} with a "{task_type}" task assigned to {assignee_id:u64}"#
)]
fn reference_with_task(
    world: &mut ReassignmentWorld,
    reference_type: String,
    reference_id: u64,
    task_type: String,
    assignee_id: u64,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(
        reference_id,
        reference_type,
        task_type,
        assignee_id,
        TaskPriority::Medium,
    );
    let created = run_async(world.service.create_tasks(vec![request]))
        .wrap_err("create task for reassignment scenario")?;
    world.original_task = created.into_iter().next();
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_moved_to(world: &mut ReassignmentWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = world
        .original_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    run_async(
        world
            .service
            .update_tasks(vec![UpdateTaskRequest::new(task.id()).with_status(target)]),
    )
    .wrap_err("move task in scenario setup")?;
    Ok(())
}
