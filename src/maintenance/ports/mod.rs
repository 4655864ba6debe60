//! Port contracts for maintenance task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{
    MaintenanceTaskRepository, TaskRecord, TaskRepositoryError, TaskRepositoryResult,
};
