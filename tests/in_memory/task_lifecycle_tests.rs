//! In-memory integration tests for task creation, update, and retrieval.

use super::helpers::{Services, june, services};
use chrono::Duration;
use rstest::rstest;
use workforce::task::{
    adapters::to_task_views,
    domain::{TaskPriority, TaskStatus},
    services::{CreateTaskRequest, FetchTasksByDateRequest, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_move_through_their_lifecycle(services: Services) -> eyre::Result<()> {
    let created = services
        .lifecycle
        .create_tasks(vec![
            CreateTaskRequest::new(501, "ORDER", "CREATE_INVOICE", 4, TaskPriority::High)
                .with_deadline(june(3)),
        ])
        .await?;
    let task = created
        .first()
        .ok_or_else(|| eyre::eyre!("expected one created task"))?;

    services
        .lifecycle
        .update_tasks(vec![
            UpdateTaskRequest::new(task.id())
                .with_status(TaskStatus::Started)
                .with_description("Drafting invoice"),
        ])
        .await?;
    services
        .lifecycle
        .update_tasks(vec![UpdateTaskRequest::new(task.id()).with_status(TaskStatus::Completed)])
        .await?;

    let stored = services.lifecycle.find_by_id(task.id()).await?;
    eyre::ensure!(stored.status() == TaskStatus::Completed, "task should be completed");
    eyre::ensure!(
        stored.description() == "Drafting invoice",
        "status-only update must keep the description"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn date_window_keeps_overdue_work_until_completed(services: Services) -> eyre::Result<()> {
    let start = june(10);
    let end = june(14);
    let created = services
        .lifecycle
        .create_tasks(vec![
            CreateTaskRequest::new(600, "SHIPMENT", "PICKUP", 8, TaskPriority::Medium)
                .with_deadline(start - Duration::days(2)),
            CreateTaskRequest::new(600, "SHIPMENT", "DELIVERY", 8, TaskPriority::Medium)
                .with_deadline(start - Duration::days(1)),
            CreateTaskRequest::new(601, "SHIPMENT", "PICKUP", 9, TaskPriority::Low)
                .with_deadline(june(12)),
        ])
        .await?;
    let [overdue, finished, current] = created.as_slice() else {
        eyre::bail!("expected three created tasks, got {}", created.len());
    };
    services
        .lifecycle
        .update_tasks(vec![UpdateTaskRequest::new(finished.id()).with_status(TaskStatus::Completed)])
        .await?;

    let visible = services
        .lifecycle
        .fetch_tasks_by_date(FetchTasksByDateRequest::new([8, 9], start, end))
        .await?;

    let ids: Vec<_> = visible.iter().map(|task| task.id()).collect();
    eyre::ensure!(
        ids == [overdue.id(), current.id()],
        "unexpected tasks in window: {ids:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_views_serialize_with_public_field_names(services: Services) -> eyre::Result<()> {
    let created = services
        .lifecycle
        .create_tasks(vec![
            CreateTaskRequest::new(700, "ORDER", "ARRANGE_PICKUP", 12, TaskPriority::Low)
                .with_deadline(june(20)),
        ])
        .await?;

    let json = serde_json::to_value(to_task_views(&created))?;
    let view = json
        .get(0)
        .ok_or_else(|| eyre::eyre!("expected one view"))?;

    eyre::ensure!(view["referenceId"] == 700, "referenceId mismatch: {view}");
    eyre::ensure!(view["referenceType"] == "ORDER", "referenceType mismatch: {view}");
    eyre::ensure!(view["task"] == "ARRANGE_PICKUP", "task mismatch: {view}");
    eyre::ensure!(view["assigneeId"] == 12, "assigneeId mismatch: {view}");
    eyre::ensure!(view["status"] == "ASSIGNED", "status mismatch: {view}");
    eyre::ensure!(view["priority"] == "LOW", "priority mismatch: {view}");
    eyre::ensure!(
        view["taskDeadlineTime"].is_string(),
        "deadline should serialize as a timestamp: {view}"
    );
    Ok(())
}
