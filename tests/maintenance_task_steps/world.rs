//! Shared world state for maintenance task BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use servicebay::maintenance::{
    adapters::memory::InMemoryMaintenanceTaskRepository,
    services::{MaintenanceTaskError, MaintenanceTaskService, TaskSnapshot},
};

/// Service type used by the BDD world.
pub type TestMaintenanceService = MaintenanceTaskService<InMemoryMaintenanceTaskRepository>;

/// Scenario world for maintenance task behaviour tests.
pub struct MaintenanceWorld {
    pub service: TestMaintenanceService,
    pub current_task: Option<TaskSnapshot>,
    pub last_error: Option<MaintenanceTaskError>,
    pub listed: Vec<TaskSnapshot>,
}

impl MaintenanceWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: MaintenanceTaskService::new(Arc::new(
                InMemoryMaintenanceTaskRepository::default(),
            )),
            current_task: None,
            last_error: None,
            listed: Vec::new(),
        }
    }

    /// Returns the task the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn current_task(&self) -> Result<&TaskSnapshot, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }

    /// Records the outcome of a service call.
    pub fn record(&mut self, result: Result<TaskSnapshot, MaintenanceTaskError>) {
        match result {
            Ok(snapshot) => self.current_task = Some(snapshot),
            Err(err) => self.last_error = Some(err),
        }
    }
}

impl Default for MaintenanceWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MaintenanceWorld {
    MaintenanceWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
