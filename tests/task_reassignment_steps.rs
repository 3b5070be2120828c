//! Behaviour tests for reference task reassignment.

#[path = "task_reassignment_steps/mod.rs"]
mod task_reassignment_steps_defs;

use rstest_bdd_macros::scenario;
use task_reassignment_steps_defs::world::{ReassignmentWorld, world};

#[scenario(
    path = "tests/features/task_reassignment.feature",
    name = "Reassign a shipment with a started pickup"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reassign_shipment_with_started_pickup(world: ReassignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reassignment.feature",
    name = "Completed work survives reassignment"
)]
#[tokio::test(flavor = "multi_thread")]
async fn completed_work_survives_reassignment(world: ReassignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reassignment.feature",
    name = "Reassign an order that has no tasks yet"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reassign_order_without_tasks(world: ReassignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reassignment.feature",
    name = "Reject a reference type without a catalog entry"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_reference_type_without_catalog_entry(world: ReassignmentWorld) {
    let _ = world;
}
