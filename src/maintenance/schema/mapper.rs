//! Projections between the task aggregate and its persisted envelope.
//!
//! Both directions are total: the envelope can describe every aggregate,
//! and every well-formed envelope describes an aggregate.

use super::{TaskDetailsDocument, TaskEnvelope};
use crate::maintenance::domain::{
    DiagnosticScanDetails, MaintenanceTask, PersistedTaskData, TaskDetails, TireServiceDetails,
};

/// Projects an aggregate into the current envelope shape.
#[must_use]
pub fn to_envelope(task: &MaintenanceTask) -> TaskEnvelope {
    TaskEnvelope {
        task_id: task.id(),
        vin: task.vin().to_owned(),
        task_type: task.task_type(),
        status: task.status(),
        notes: task.notes().map(ToOwned::to_owned),
        details: task.details().map(details_to_document),
    }
}

/// Rebuilds an aggregate from an envelope.
#[must_use]
pub fn to_aggregate(envelope: TaskEnvelope) -> MaintenanceTask {
    let TaskEnvelope {
        task_id,
        vin,
        task_type,
        status,
        notes,
        details,
    } = envelope;

    MaintenanceTask::reconstitute(PersistedTaskData {
        id: task_id,
        vin,
        task_type,
        status,
        notes,
        details: details.map(document_to_details),
    })
}

fn details_to_document(details: &TaskDetails) -> TaskDetailsDocument {
    match details {
        TaskDetails::TireService(tire) => TaskDetailsDocument::TireService {
            tire_position: tire.position,
            tire_service_type: tire.service_type,
        },
        TaskDetails::DiagnosticScan(scan) => TaskDetailsDocument::DiagnosticScan {
            error_codes: scan.error_codes.clone(),
            scanner_type: scan.scanner_type,
        },
    }
}

fn document_to_details(document: TaskDetailsDocument) -> TaskDetails {
    match document {
        TaskDetailsDocument::TireService {
            tire_position,
            tire_service_type,
        } => TaskDetails::TireService(TireServiceDetails {
            position: tire_position,
            service_type: tire_service_type,
        }),
        TaskDetailsDocument::DiagnosticScan {
            error_codes,
            scanner_type,
        } => TaskDetails::DiagnosticScan(DiagnosticScanDetails {
            error_codes,
            scanner_type,
        }),
    }
}
