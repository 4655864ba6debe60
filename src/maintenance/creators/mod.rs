//! Per-type task creators and the dispatch over them.
//!
//! Each creator validates an untyped [`DetailPayload`] for exactly one
//! [`TaskType`] and builds the aggregate through its factory. Dispatch is an
//! exhaustive match over the closed type enumeration, so every parsed type
//! has exactly one creator and registration order cannot matter. Unknown
//! type literals are rejected earlier, when the literal is parsed.

mod basic;
mod diagnostic_scan;
mod error;
mod payload;
mod tire_service;

pub use basic::{BrakeInspectionCreator, OilChangeCreator};
pub use diagnostic_scan::{DiagnosticScanCreator, ERROR_CODES_FIELD, SCANNER_TYPE_FIELD};
pub use error::CreateTaskError;
pub use payload::DetailPayload;
pub use tire_service::{TIRE_POSITION_FIELD, TIRE_SERVICE_TYPE_FIELD, TireServiceCreator};

use crate::maintenance::domain::{MaintenanceTask, TaskType};

/// Strategy that validates a detail payload and builds one task type.
pub trait TaskCreator {
    /// The single task type this creator builds.
    const TASK_TYPE: TaskType;

    /// Validates `payload` and builds a task.
    ///
    /// # Errors
    ///
    /// Returns [`CreateTaskError::MissingField`] or
    /// [`CreateTaskError::InvalidField`] when the payload lacks a required
    /// field or holds a malformed one, and [`CreateTaskError::Domain`] when
    /// the aggregate factory rejects the task.
    fn create(
        &self,
        vin: &str,
        notes: Option<String>,
        payload: &DetailPayload,
    ) -> Result<MaintenanceTask, CreateTaskError>;
}

const REGISTERED_TYPES: [TaskType; 4] = [
    OilChangeCreator::TASK_TYPE,
    BrakeInspectionCreator::TASK_TYPE,
    TireServiceCreator::TASK_TYPE,
    DiagnosticScanCreator::TASK_TYPE,
];

/// Returns the task types with a registered creator, in dispatch order.
#[must_use]
pub const fn creator_types() -> &'static [TaskType] {
    &REGISTERED_TYPES
}

/// Builds a task of `task_type` using the matching creator.
///
/// # Errors
///
/// Propagates the creator's [`CreateTaskError`] unchanged.
pub fn create_task(
    vin: &str,
    notes: Option<String>,
    task_type: TaskType,
    payload: &DetailPayload,
) -> Result<MaintenanceTask, CreateTaskError> {
    tracing::debug!(
        %task_type,
        payload_keys = ?payload.keys().collect::<Vec<_>>(),
        "dispatching task creation"
    );
    match task_type {
        TaskType::OilChange => OilChangeCreator.create(vin, notes, payload),
        TaskType::BrakeInspection => BrakeInspectionCreator.create(vin, notes, payload),
        TaskType::TireService => TireServiceCreator.create(vin, notes, payload),
        TaskType::DiagnosticScan => DiagnosticScanCreator.create(vin, notes, payload),
    }
}

/// Parses a task type literal supplied by a caller.
///
/// # Errors
///
/// Returns [`CreateTaskError::UnknownTaskType`] naming the literal when it
/// matches no task type.
pub fn parse_task_type(literal: &str) -> Result<TaskType, CreateTaskError> {
    TaskType::try_from(literal).map_err(CreateTaskError::UnknownTaskType)
}
