//! Repository port for maintenance task storage, lookup and updates.

use crate::maintenance::{
    domain::{MaintenanceTask, TaskId, TaskStatus},
    schema::SchemaError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Stored form of one task: the serialized envelope plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Repository-assigned identifier.
    pub id: TaskId,
    /// Serialized, version-tagged envelope.
    pub aggregate: String,
    /// When the record was first stored.
    pub created_at: DateTime<Utc>,
    /// When the record was last written.
    pub updated_at: DateTime<Utc>,
}

/// Maintenance task persistence contract.
///
/// Implementations own identifier assignment and are the only component
/// that mutates stored records. Each mutation is a read-modify-write of one
/// record that must not interleave with another write to the same record.
#[async_trait]
pub trait MaintenanceTaskRepository: Send + Sync {
    /// Stores a new task under a freshly assigned identifier.
    ///
    /// Returns the task as re-derived from the stored envelope, so the
    /// caller observes the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Serialization`] if the envelope cannot
    /// be encoded or [`TaskRepositoryError::Persistence`] on store failure.
    async fn create(&self, task: &MaintenanceTask) -> TaskRepositoryResult<MaintenanceTask>;

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record exists.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<MaintenanceTask>;

    /// Returns the raw stored record for a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record exists.
    async fn find_record(&self, id: TaskId) -> TaskRepositoryResult<TaskRecord>;

    /// Replaces a task's status, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record exists.
    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<MaintenanceTask>;

    /// Replaces a task's notes, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record exists.
    async fn upsert_notes(
        &self,
        id: TaskId,
        notes: Option<String>,
    ) -> TaskRepositoryResult<MaintenanceTask>;

    /// Returns every stored task. Order is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Serialization`] if any stored envelope
    /// fails to decode.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<MaintenanceTask>>;

    /// Returns every stored task whose VIN equals `vin` exactly.
    ///
    /// Order is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Serialization`] if any stored envelope
    /// fails to decode.
    async fn find_by_vin(&self, vin: &str) -> TaskRepositoryResult<Vec<MaintenanceTask>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Error)]
pub enum TaskRepositoryError {
    /// No record exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A stored envelope could not be encoded or decoded.
    #[error(transparent)]
    Serialization(#[from] SchemaError),

    /// The identifier space is exhausted.
    #[error("task identifier space exhausted")]
    IdentifiersExhausted,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
