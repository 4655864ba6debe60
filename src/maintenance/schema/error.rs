//! Errors raised while encoding or decoding versioned schema documents.

use crate::maintenance::domain::TaskType;
use thiserror::Error;

/// Result type for schema serialization operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors returned by [`VersionedSchemaSerDes`](super::VersionedSchemaSerDes)
/// implementations.
///
/// Every variant indicates corrupt stored data or an internal defect; none is
/// correctable by the caller.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The encoder failed to produce a document.
    #[error("failed to encode schema document: {0}")]
    Encode(#[source] serde_json::Error),

    /// The document is malformed or does not match the expected shape.
    #[error("failed to decode schema document: {0}")]
    Decode(#[source] serde_json::Error),

    /// The document carries a version tag this build cannot read.
    #[error("unsupported schema version {found}, current version is {current}")]
    UnsupportedVersion {
        /// Version tag found in the document.
        found: u32,
        /// Version of the shape this build reads.
        current: u32,
    },

    /// The document's `details` disagree with its task type.
    #[error("task type {task_type} does not match details kind {details_kind:?}")]
    InconsistentDetails {
        /// Task type named by the document.
        task_type: TaskType,
        /// Task type named by the `details` discriminant, if present.
        details_kind: Option<TaskType>,
    },
}
