//! Application services for maintenance task orchestration.

mod lifecycle;
mod snapshot;

pub use lifecycle::{
    CreateTaskRequest, ErrorKind, MaintenanceTaskError, MaintenanceTaskResult,
    MaintenanceTaskService, VIN_LENGTH,
};
pub use snapshot::TaskSnapshot;
