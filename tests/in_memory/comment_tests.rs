//! In-memory integration tests for task comments.

use super::helpers::{Services, services};
use rstest::rstest;
use workforce::task::{
    adapters::TaskCommentView,
    domain::TaskPriority,
    services::{AddCommentRequest, AssignByReferenceRequest, CreateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_outlive_reassignment(services: Services) -> eyre::Result<()> {
    let created = services
        .lifecycle
        .create_tasks(vec![CreateTaskRequest::new(
            1200,
            "ORDER",
            "CREATE_INVOICE",
            3,
            TaskPriority::Medium,
        )])
        .await?;
    let task = created
        .first()
        .ok_or_else(|| eyre::eyre!("expected one created task"))?;
    services
        .comments
        .add_comment(AddCommentRequest::new(task.id(), "agent-3", "Awaiting PO number"))
        .await?;

    services
        .lifecycle
        .assign_by_reference(AssignByReferenceRequest::new(1200, "ORDER", 4))
        .await?;

    let comments = services.comments.list_comments(task.id()).await?;
    let views: Vec<_> = comments.iter().map(TaskCommentView::from).collect();
    let json = serde_json::to_value(&views)?;
    eyre::ensure!(json[0]["comment"] == "Awaiting PO number", "unexpected view: {json}");
    eyre::ensure!(json[0]["createdBy"] == "agent-3", "unexpected view: {json}");
    Ok(())
}
