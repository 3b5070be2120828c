//! In-memory integration tests for reference reassignment.

use super::helpers::{Services, services};
use rstest::rstest;
use workforce::task::{
    domain::{TaskPriority, TaskStatus},
    services::{AssignByReferenceRequest, CreateTaskRequest, TaskLifecycleError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_catalog_drives_replacement_types(services: Services) -> eyre::Result<()> {
    services
        .lifecycle
        .create_tasks(vec![CreateTaskRequest::new(
            900,
            "SHIPMENT",
            "PROOF_OF_DELIVERY",
            1,
            TaskPriority::High,
        )])
        .await?;

    let receipt = services
        .lifecycle
        .assign_by_reference(AssignByReferenceRequest::new(900, "SHIPMENT", 2))
        .await?;

    let created: Vec<_> = receipt
        .created()
        .iter()
        .map(|task| task.task_type().as_str())
        .collect();
    eyre::ensure!(
        created == ["PICKUP", "DELIVERY", "PROOF_OF_DELIVERY"],
        "replacements follow catalog order, got {created:?}"
    );
    eyre::ensure!(receipt.cancelled().len() == 1, "one live task superseded");
    eyre::ensure!(
        receipt
            .cancelled()
            .iter()
            .all(|task| task.status() == TaskStatus::Cancelled),
        "superseded tasks are cancelled"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reference_types_missing_from_configured_catalog_are_rejected(services: Services) {
    let result = services
        .lifecycle
        .assign_by_reference(AssignByReferenceRequest::new(901, "ENTITY", 2))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::Catalog(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_references_are_untouched(services: Services) -> eyre::Result<()> {
    let created = services
        .lifecycle
        .create_tasks(vec![
            CreateTaskRequest::new(902, "SHIPMENT", "PICKUP", 1, TaskPriority::Low),
            CreateTaskRequest::new(903, "SHIPMENT", "PICKUP", 1, TaskPriority::Low),
        ])
        .await?;
    let untouched = created
        .last()
        .ok_or_else(|| eyre::eyre!("expected two created tasks"))?;

    services
        .lifecycle
        .assign_by_reference(AssignByReferenceRequest::new(902, "SHIPMENT", 2))
        .await?;

    let stored = services.lifecycle.find_by_id(untouched.id()).await?;
    eyre::ensure!(stored == *untouched, "task on another reference changed");
    Ok(())
}
