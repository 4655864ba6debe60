//! Creator for tire service tasks.

use super::{CreateTaskError, DetailPayload, TaskCreator, payload::required_enum};
use crate::maintenance::domain::{MaintenanceTask, TaskType, TirePosition, TireServiceType};

/// Payload key naming the wheel position.
pub const TIRE_POSITION_FIELD: &str = "tirePosition";

/// Payload key naming the kind of tire work.
pub const TIRE_SERVICE_TYPE_FIELD: &str = "tireServiceType";

/// Builds [`TaskType::TireService`] tasks.
///
/// Requires `tirePosition` and `tireServiceType`, each a string naming a
/// member of [`TirePosition`] and [`TireServiceType`] respectively.
#[derive(Debug, Clone, Copy, Default)]
pub struct TireServiceCreator;

impl TaskCreator for TireServiceCreator {
    const TASK_TYPE: TaskType = TaskType::TireService;

    fn create(
        &self,
        vin: &str,
        notes: Option<String>,
        payload: &DetailPayload,
    ) -> Result<MaintenanceTask, CreateTaskError> {
        let position: TirePosition = required_enum(payload, TIRE_POSITION_FIELD)?;
        let service_type: TireServiceType = required_enum(payload, TIRE_SERVICE_TYPE_FIELD)?;
        tracing::debug!(%position, %service_type, "validated tire service payload");

        Ok(MaintenanceTask::create_tire_service(
            vin,
            notes,
            position,
            service_type,
        )?)
    }
}
