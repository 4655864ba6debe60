//! Creators for task types without extension data.

use super::{CreateTaskError, DetailPayload, TaskCreator};
use crate::maintenance::domain::{MaintenanceTask, TaskType};

/// Builds [`TaskType::OilChange`] tasks. The payload is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OilChangeCreator;

impl TaskCreator for OilChangeCreator {
    const TASK_TYPE: TaskType = TaskType::OilChange;

    fn create(
        &self,
        vin: &str,
        notes: Option<String>,
        _payload: &DetailPayload,
    ) -> Result<MaintenanceTask, CreateTaskError> {
        Ok(MaintenanceTask::create_oil_change(vin, notes)?)
    }
}

/// Builds [`TaskType::BrakeInspection`] tasks. The payload is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrakeInspectionCreator;

impl TaskCreator for BrakeInspectionCreator {
    const TASK_TYPE: TaskType = TaskType::BrakeInspection;

    fn create(
        &self,
        vin: &str,
        notes: Option<String>,
        _payload: &DetailPayload,
    ) -> Result<MaintenanceTask, CreateTaskError> {
        Ok(MaintenanceTask::create_brake_inspection(vin, notes)?)
    }
}
