//! Externally facing task representations.
//!
//! Views are plain `serde` shapes with no behaviour; field names follow the
//! public API (`referenceId`, `taskDeadlineTime`, ...).

use crate::task::domain::{
    AssigneeId, CommentId, ReferenceId, ReferenceType, Task, TaskComment, TaskId, TaskPriority,
    TaskStatus, TaskType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public shape of a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Reference entity identifier.
    pub reference_id: ReferenceId,
    /// Reference entity classification.
    pub reference_type: ReferenceType,
    /// Kind of work.
    pub task: TaskType,
    /// Free-text annotation.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Current assignee.
    pub assignee_id: AssigneeId,
    /// Deadline, if any.
    pub task_deadline_time: Option<DateTime<Utc>>,
    /// Urgency, if any.
    pub priority: Option<TaskPriority>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            reference_id: task.reference().reference_id(),
            reference_type: task.reference().reference_type().clone(),
            task: task.task_type().clone(),
            description: task.description().to_owned(),
            status: task.status(),
            assignee_id: task.assignee_id(),
            task_deadline_time: task.deadline(),
            priority: task.priority(),
        }
    }
}

/// Converts tasks to views, preserving order.
#[must_use]
pub fn to_task_views(tasks: &[Task]) -> Vec<TaskView> {
    tasks.iter().map(TaskView::from).collect()
}

/// Public shape of a task comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCommentView {
    /// Comment identifier.
    pub id: CommentId,
    /// Task the comment belongs to.
    pub task_id: TaskId,
    /// Comment text.
    pub comment: String,
    /// Creation timestamp.
    pub timestamp: DateTime<Utc>,
    /// Author.
    pub created_by: String,
}

impl From<&TaskComment> for TaskCommentView {
    fn from(comment: &TaskComment) -> Self {
        Self {
            id: comment.id(),
            task_id: comment.task_id(),
            comment: comment.body().to_owned(),
            timestamp: comment.created_at(),
            created_by: comment.author().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::domain::{NewTask, TaskReference};
    use chrono::TimeZone;
    use mockable::DefaultClock;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn task_view_serialises_with_public_field_names() {
        let deadline = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let task = Task::new(
            NewTask {
                reference: TaskReference::from_parts(42, "shipment").expect("valid reference"),
                task_type: TaskType::new("PICKUP").expect("valid task type"),
                assignee_id: AssigneeId::new(7).expect("valid assignee"),
                priority: Some(TaskPriority::High),
                deadline: Some(deadline),
            },
            &DefaultClock,
        );

        let value = serde_json::to_value(TaskView::from(&task)).expect("serialisable view");

        assert_eq!(value["referenceId"], json!(42));
        assert_eq!(value["referenceType"], json!("SHIPMENT"));
        assert_eq!(value["task"], json!("PICKUP"));
        assert_eq!(value["assigneeId"], json!(7));
        assert_eq!(value["status"], json!("ASSIGNED"));
        assert_eq!(value["priority"], json!("HIGH"));
        assert_eq!(value["description"], json!("New task created."));
        assert_eq!(value["taskDeadlineTime"], json!("2026-03-01T09:30:00Z"));
    }

    #[rstest]
    fn to_task_views_preserves_order() {
        let reference = TaskReference::from_parts(5, "ORDER").expect("valid reference");
        let tasks: Vec<Task> = ["CREATE_INVOICE", "ARRANGE_PICKUP"]
            .into_iter()
            .map(|kind| {
                Task::new(
                    NewTask {
                        reference: reference.clone(),
                        task_type: TaskType::new(kind).expect("valid task type"),
                        assignee_id: AssigneeId::new(1).expect("valid assignee"),
                        priority: None,
                        deadline: None,
                    },
                    &DefaultClock,
                )
            })
            .collect();

        let views = to_task_views(&tasks);
        let ids: Vec<_> = views.iter().map(|view| view.id).collect();
        let expected: Vec<_> = tasks.iter().map(Task::id).collect();
        assert_eq!(ids, expected);
    }
}
