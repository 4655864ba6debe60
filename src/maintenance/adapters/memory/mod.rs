//! In-memory adapters for maintenance task persistence.

mod repository;

pub use repository::InMemoryMaintenanceTaskRepository;
