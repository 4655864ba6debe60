//! Domain model for vehicle maintenance tasks.
//!
//! The aggregate, its closed enumerations and the typed extension payloads
//! live here. Nothing in this module knows about storage formats or untyped
//! request data.

mod details;
mod error;
mod ids;
mod kinds;
mod task;

pub use details::{
    DiagnosticScanDetails, ScannerType, TaskDetails, TirePosition, TireServiceDetails,
    TireServiceType,
};
pub use error::{ParseEnumError, TaskDomainError};
pub use ids::{ParseTaskIdError, TaskId};
pub use kinds::{TaskStatus, TaskType};
pub use task::{MaintenanceTask, PersistedTaskData};
