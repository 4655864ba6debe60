//! Maintenance task aggregate root and its factories.

use super::{
    DiagnosticScanDetails, ScannerType, TaskDetails, TaskDomainError, TaskId, TaskStatus,
    TaskType, TirePosition, TireServiceDetails, TireServiceType,
};

/// Maintenance task aggregate root.
///
/// Instances are built through the `create_*` factories, which start every
/// task in [`TaskStatus::InProgress`], or rebuilt from storage through
/// [`MaintenanceTask::reconstitute`]. The identifier stays `None` until a
/// repository persists the task.
///
/// The aggregate has no serialized form of its own; persistence goes through
/// the versioned envelope in [`crate::maintenance::schema`].
///
/// ```compile_fail
/// use servicebay::maintenance::domain::MaintenanceTask;
///
/// let _ = serde_json::from_str::<MaintenanceTask>("{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceTask {
    id: Option<TaskId>,
    vin: String,
    task_type: TaskType,
    status: TaskStatus,
    notes: Option<String>,
    details: Option<TaskDetails>,
}

/// Parameter object for reconstructing a persisted maintenance task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier, if one was assigned.
    pub id: Option<TaskId>,
    /// Vehicle identification number.
    pub vin: String,
    /// Persisted task type.
    pub task_type: TaskType,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted notes, if any.
    pub notes: Option<String>,
    /// Persisted type-specific details, if any.
    pub details: Option<TaskDetails>,
}

impl MaintenanceTask {
    /// Creates an oil change task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] if the built task violates
    /// its invariants.
    pub fn create_oil_change(
        vin: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, TaskDomainError> {
        TaskDraft::new(vin, notes, TaskType::OilChange).build()
    }

    /// Creates a brake inspection task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] if the built task violates
    /// its invariants.
    pub fn create_brake_inspection(
        vin: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, TaskDomainError> {
        TaskDraft::new(vin, notes, TaskType::BrakeInspection).build()
    }

    /// Creates a tire service task for one wheel position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] if the built task violates
    /// its invariants.
    pub fn create_tire_service(
        vin: impl Into<String>,
        notes: Option<String>,
        position: TirePosition,
        service_type: TireServiceType,
    ) -> Result<Self, TaskDomainError> {
        TaskDraft::new(vin, notes, TaskType::TireService)
            .with_details(TireServiceDetails {
                position,
                service_type,
            })
            .build()
    }

    /// Creates a diagnostic scan task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] if the built task violates
    /// its invariants.
    pub fn create_diagnostic_scan(
        vin: impl Into<String>,
        notes: Option<String>,
        error_codes: Vec<String>,
        scanner_type: ScannerType,
    ) -> Result<Self, TaskDomainError> {
        TaskDraft::new(vin, notes, TaskType::DiagnosticScan)
            .with_details(DiagnosticScanDetails {
                error_codes,
                scanner_type,
            })
            .build()
    }

    /// Rebuilds a task from persisted state.
    ///
    /// No defaulting or validation is applied: the stored status is
    /// authoritative.
    #[must_use]
    pub fn reconstitute(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            vin: data.vin,
            task_type: data.task_type,
            status: data.status,
            notes: data.notes,
            details: data.details,
        }
    }

    /// Returns the repository-assigned identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the vehicle identification number.
    #[must_use]
    pub fn vin(&self) -> &str {
        &self.vin
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the type-specific details, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&TaskDetails> {
        self.details.as_ref()
    }

    /// Replaces the lifecycle status.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces the notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }
}

/// Partially assembled task checked by [`TaskDraft::build`].
#[derive(Debug, Default)]
struct TaskDraft {
    vin: String,
    task_type: Option<TaskType>,
    status: Option<TaskStatus>,
    notes: Option<String>,
    details: Option<TaskDetails>,
}

impl TaskDraft {
    fn new(vin: impl Into<String>, notes: Option<String>, task_type: TaskType) -> Self {
        Self {
            vin: vin.into(),
            task_type: Some(task_type),
            status: Some(TaskStatus::InProgress),
            notes,
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<TaskDetails>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn build(self) -> Result<MaintenanceTask, TaskDomainError> {
        let (Some(task_type), Some(status)) = (self.task_type, self.status) else {
            return Err(TaskDomainError::InvalidState(
                "task must have a type and status".to_owned(),
            ));
        };

        let details_type = self.details.as_ref().map(TaskDetails::task_type);
        let consistent = if task_type.carries_details() {
            details_type == Some(task_type)
        } else {
            details_type.is_none()
        };
        if !consistent {
            return Err(TaskDomainError::InvalidState(format!(
                "details do not match task type {task_type}"
            )));
        }

        Ok(MaintenanceTask {
            id: None,
            vin: self.vin,
            task_type,
            status,
            notes: self.notes,
            details: self.details,
        })
    }
}
