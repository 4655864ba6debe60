//! Creator for diagnostic scan tasks.

use super::{
    CreateTaskError, DetailPayload, TaskCreator,
    payload::{required_enum, required_string_list},
};
use crate::maintenance::domain::{MaintenanceTask, ScannerType, TaskType};

/// Payload key holding the list of fault codes.
pub const ERROR_CODES_FIELD: &str = "errorCodes";

/// Payload key naming the scanner used.
pub const SCANNER_TYPE_FIELD: &str = "scannerType";

/// Builds [`TaskType::DiagnosticScan`] tasks.
///
/// Requires `errorCodes` as a list (elements are coerced to strings, order
/// preserved) and `scannerType` naming a member of [`ScannerType`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticScanCreator;

impl TaskCreator for DiagnosticScanCreator {
    const TASK_TYPE: TaskType = TaskType::DiagnosticScan;

    fn create(
        &self,
        vin: &str,
        notes: Option<String>,
        payload: &DetailPayload,
    ) -> Result<MaintenanceTask, CreateTaskError> {
        let error_codes = required_string_list(payload, ERROR_CODES_FIELD)?;
        let scanner_type: ScannerType = required_enum(payload, SCANNER_TYPE_FIELD)?;
        tracing::debug!(
            code_count = error_codes.len(),
            %scanner_type,
            "validated diagnostic scan payload"
        );

        Ok(MaintenanceTask::create_diagnostic_scan(
            vin,
            notes,
            error_codes,
            scanner_type,
        )?)
    }
}
