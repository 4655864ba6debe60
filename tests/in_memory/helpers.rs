//! Shared test helpers for in-memory maintenance task integration tests.

use std::sync::Arc;

use rstest::fixture;
use servicebay::maintenance::{
    adapters::memory::InMemoryMaintenanceTaskRepository, services::MaintenanceTaskService,
};

/// VIN used by most scenarios.
pub const VIN: &str = "1HGCM82633A004352";

/// Second VIN for filtering scenarios.
pub const OTHER_VIN: &str = "WBA3A5C55CF256651";

/// Service type used by in-memory integration tests.
pub type TestService = MaintenanceTaskService<InMemoryMaintenanceTaskRepository>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryMaintenanceTaskRepository> {
    Arc::new(InMemoryMaintenanceTaskRepository::default())
}

/// Provides a service over a fresh in-memory repository.
#[fixture]
pub fn service(repo: Arc<InMemoryMaintenanceTaskRepository>) -> TestService {
    MaintenanceTaskService::new(repo)
}
