//! Version-tagged persistence projection of a maintenance task.

use crate::maintenance::domain::{
    ScannerType, TaskId, TaskStatus, TaskType, TirePosition, TireServiceType,
};
use super::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A serializable shape with a fixed schema version.
///
/// The version belongs to the shape, not to instances: every value of a
/// type shares the same [`SCHEMA_VERSION`](VersionedSchema::SCHEMA_VERSION).
pub trait VersionedSchema: Serialize + DeserializeOwned {
    /// Version number of this shape.
    const SCHEMA_VERSION: u32;

    /// Returns the version of this shape.
    fn schema_version(&self) -> u32 {
        Self::SCHEMA_VERSION
    }

    /// Checks constraints between fields that decoding alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first violated constraint.
    fn check_consistency(&self) -> SchemaResult<()> {
        Ok(())
    }
}

/// Persisted shape of a maintenance task, schema version 1.
///
/// Serialized field names are camelCase. Type-specific data travels as the
/// `details` sub-document, which carries its own discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEnvelope {
    /// Repository-assigned identifier; `None` until stamped at creation.
    #[serde(default)]
    pub task_id: Option<TaskId>,
    /// Vehicle identification number.
    pub vin: String,
    /// Task type.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Type-specific extension data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<TaskDetailsDocument>,
}

impl VersionedSchema for TaskEnvelope {
    const SCHEMA_VERSION: u32 = 1;

    /// Requires `details` exactly when the task type carries them, with a
    /// `kind` equal to the envelope `type`.
    fn check_consistency(&self) -> SchemaResult<()> {
        let details_kind = self.details.as_ref().map(TaskDetailsDocument::task_type);
        let expected = self
            .task_type
            .carries_details()
            .then_some(self.task_type);
        if details_kind == expected {
            return Ok(());
        }
        Err(SchemaError::InconsistentDetails {
            task_type: self.task_type,
            details_kind,
        })
    }
}

/// Persisted shape of type-specific task data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskDetailsDocument {
    /// Tire service fields.
    #[serde(rename_all = "camelCase")]
    TireService {
        /// Wheel position.
        tire_position: TirePosition,
        /// Kind of tire work.
        tire_service_type: TireServiceType,
    },
    /// Diagnostic scan fields.
    #[serde(rename_all = "camelCase")]
    DiagnosticScan {
        /// Fault codes in reported order.
        error_codes: Vec<String>,
        /// Scanner used.
        scanner_type: ScannerType,
    },
}

impl TaskDetailsDocument {
    /// Returns the task type named by the `kind` discriminant.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        match self {
            Self::TireService { .. } => TaskType::TireService,
            Self::DiagnosticScan { .. } => TaskType::DiagnosticScan,
        }
    }
}
