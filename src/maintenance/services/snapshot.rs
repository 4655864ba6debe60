//! Read-only view of a task returned to callers.

use crate::maintenance::domain::{
    MaintenanceTask, ScannerType, TaskDetails, TaskId, TaskStatus, TaskType, TirePosition,
    TireServiceType,
};
use serde::Serialize;

/// Flattened, serializable view of a maintenance task.
///
/// Detail fields are present only for the task types that carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    /// Repository-assigned identifier.
    pub task_id: Option<TaskId>,
    /// Vehicle identification number.
    pub vin: String,
    /// Task type.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Wheel position, for tire services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tire_position: Option<TirePosition>,
    /// Kind of tire work, for tire services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tire_service_type: Option<TireServiceType>,
    /// Reported fault codes, for diagnostic scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_codes: Option<Vec<String>>,
    /// Scanner used, for diagnostic scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner_type: Option<ScannerType>,
}

impl From<&MaintenanceTask> for TaskSnapshot {
    fn from(task: &MaintenanceTask) -> Self {
        let mut snapshot = Self {
            task_id: task.id(),
            vin: task.vin().to_owned(),
            task_type: task.task_type(),
            status: task.status(),
            notes: task.notes().map(str::to_owned),
            tire_position: None,
            tire_service_type: None,
            error_codes: None,
            scanner_type: None,
        };
        match task.details() {
            Some(TaskDetails::TireService(details)) => {
                snapshot.tire_position = Some(details.position);
                snapshot.tire_service_type = Some(details.service_type);
            }
            Some(TaskDetails::DiagnosticScan(details)) => {
                snapshot.error_codes = Some(details.error_codes.clone());
                snapshot.scanner_type = Some(details.scanner_type);
            }
            None => {}
        }
        snapshot
    }
}

impl From<MaintenanceTask> for TaskSnapshot {
    fn from(task: MaintenanceTask) -> Self {
        Self::from(&task)
    }
}
