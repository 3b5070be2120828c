//! When steps for reassignment BDD scenarios.

use super::world::{ReassignmentWorld, run_async};
use rstest_bdd_macros::when;
use workforce::task::services::AssignByReferenceRequest;

#[when(r#"reference {reference_id:u64} of type "{reference_type}" is assigned to {assignee_id:u64}"#)]
fn reassign_reference(
    world: &mut ReassignmentWorld,
    reference_id: u64,
    reference_type: String,
    assignee_id: u64,
) {
    let request = AssignByReferenceRequest::new(reference_id, reference_type, assignee_id);
    world.last_reassignment = Some(run_async(world.service.assign_by_reference(request)));
}
