//! Shared world state for reassignment BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use workforce::task::{
    adapters::{StaticTaskTypeCatalog, memory::InMemoryTaskRepository},
    domain::Task,
    services::{ReassignmentReceipt, TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, StaticTaskTypeCatalog, DefaultClock>;

/// Scenario world for reassignment behaviour tests.
pub struct ReassignmentWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub service: TestTaskService,
    pub original_task: Option<Task>,
    pub last_reassignment: Option<Result<ReassignmentReceipt, TaskLifecycleError>>,
}

impl ReassignmentWorld {
    /// Creates a world backed by the standard catalog.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let service = TaskLifecycleService::new(
            Arc::clone(&repository),
            Arc::new(StaticTaskTypeCatalog::standard()),
            Arc::new(DefaultClock),
        );

        Self {
            repository,
            service,
            original_task: None,
            last_reassignment: None,
        }
    }

    /// Returns the receipt of the last successful reassignment.
    ///
    /// # Errors
    ///
    /// Returns an error when no reassignment ran or it failed.
    pub fn receipt(&self) -> Result<&ReassignmentReceipt, eyre::Report> {
        match self.last_reassignment.as_ref() {
            Some(Ok(receipt)) => Ok(receipt),
            Some(Err(err)) => Err(eyre::eyre!("reassignment failed: {err}")),
            None => Err(eyre::eyre!("no reassignment in scenario world")),
        }
    }
}

impl Default for ReassignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReassignmentWorld {
    ReassignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
