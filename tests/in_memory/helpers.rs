//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use workforce::task::{
    adapters::{
        StaticTaskTypeCatalog,
        memory::{InMemoryTaskCommentRepository, InMemoryTaskRepository},
    },
    services::{TaskCommentService, TaskLifecycleService},
};

/// Catalog document used by the integration suite.
pub const CATALOG_TOML: &str = r#"
[reference_types]
ORDER = ["CREATE_INVOICE", "ARRANGE_PICKUP"]
SHIPMENT = ["PICKUP", "DELIVERY", "PROOF_OF_DELIVERY"]
"#;

/// Lifecycle service wired to in-memory storage.
pub type LifecycleService =
    TaskLifecycleService<InMemoryTaskRepository, StaticTaskTypeCatalog, DefaultClock>;

/// Comment service wired to in-memory storage.
pub type CommentService =
    TaskCommentService<InMemoryTaskRepository, InMemoryTaskCommentRepository, DefaultClock>;

/// Services sharing one task repository.
pub struct Services {
    pub lifecycle: LifecycleService,
    pub comments: CommentService,
}

/// Provides services backed by fresh in-memory repositories and the
/// integration catalog.
///
/// # Panics
///
/// Panics if [`CATALOG_TOML`] is not a valid catalog document.
#[fixture]
pub fn services() -> Services {
    let catalog =
        StaticTaskTypeCatalog::from_toml_str(CATALOG_TOML).expect("catalog document is valid");
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);

    Services {
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::new(catalog),
            Arc::clone(&clock),
        ),
        comments: TaskCommentService::new(
            tasks,
            Arc::new(InMemoryTaskCommentRepository::new()),
            clock,
        ),
    }
}

/// Returns 08:00 UTC on the given day of June 2026.
///
/// # Panics
///
/// Panics if `day` is not a valid day of June.
#[must_use]
pub fn june(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, day, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}
