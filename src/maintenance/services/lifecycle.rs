//! Service layer for creating, updating and querying maintenance tasks.

use super::TaskSnapshot;
use crate::maintenance::{
    creators::{self, CreateTaskError, DetailPayload},
    domain::{ParseTaskIdError, TaskDomainError, TaskId, TaskStatus},
    ports::{MaintenanceTaskRepository, TaskRepositoryError},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Number of characters in a valid vehicle identification number.
pub const VIN_LENGTH: usize = 17;

/// Request payload for creating a maintenance task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    vin: String,
    task_type: String,
    notes: Option<String>,
    details: DetailPayload,
}

impl CreateTaskRequest {
    /// Creates a request for a task type literal such as `"OIL_CHANGE"`.
    #[must_use]
    pub fn new(vin: impl Into<String>, task_type: impl Into<String>) -> Self {
        Self {
            vin: vin.into(),
            task_type: task_type.into(),
            notes: None,
            details: DetailPayload::new(),
        }
    }

    /// Sets the initial notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Replaces the whole detail payload.
    #[must_use]
    pub fn with_details(mut self, details: DetailPayload) -> Self {
        self.details = details;
        self
    }

    /// Adds one detail field.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Caller-facing classification of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied malformed or incomplete input.
    BadRequest,
    /// The referenced task does not exist.
    NotFound,
    /// A task would be built in an inconsistent state.
    InvalidState,
    /// A stored envelope could not be encoded or decoded.
    Serialization,
    /// The backing store failed.
    Persistence,
}

/// Service-level errors for maintenance task operations.
#[derive(Debug, Error)]
pub enum MaintenanceTaskError {
    /// The VIN does not have exactly [`VIN_LENGTH`] characters.
    #[error("invalid VIN '{0}': expected 17 characters")]
    InvalidVin(String),
    /// A task identifier string could not be parsed.
    #[error(transparent)]
    InvalidTaskId(#[from] ParseTaskIdError),
    /// Creator validation failed.
    #[error(transparent)]
    Create(#[from] CreateTaskError),
    /// Domain invariants were violated.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl MaintenanceTaskError {
    /// Returns the caller-facing classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVin(_)
            | Self::InvalidTaskId(_)
            | Self::Create(
                CreateTaskError::MissingField { .. }
                | CreateTaskError::InvalidField { .. }
                | CreateTaskError::UnknownTaskType(_),
            ) => ErrorKind::BadRequest,
            Self::Create(CreateTaskError::Domain(_)) | Self::Domain(_) => ErrorKind::InvalidState,
            Self::Repository(TaskRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(TaskRepositoryError::Serialization(_)) => ErrorKind::Serialization,
            Self::Repository(
                TaskRepositoryError::IdentifiersExhausted | TaskRepositoryError::Persistence(_),
            ) => ErrorKind::Persistence,
        }
    }
}

/// Result type for maintenance task service operations.
pub type MaintenanceTaskResult<T> = Result<T, MaintenanceTaskError>;

/// Maintenance task orchestration service.
#[derive(Debug)]
pub struct MaintenanceTaskService<R>
where
    R: MaintenanceTaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for MaintenanceTaskService<R>
where
    R: MaintenanceTaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> MaintenanceTaskService<R>
where
    R: MaintenanceTaskRepository,
{
    /// Creates a new maintenance task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates a request, builds the task and persists it.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::BadRequest`] error for a malformed VIN, an
    /// unknown task type or an invalid detail payload, and propagates
    /// repository failures.
    pub async fn create_task(&self, request: CreateTaskRequest) -> MaintenanceTaskResult<TaskId> {
        let CreateTaskRequest {
            vin,
            task_type,
            notes,
            details,
        } = request;
        validate_vin(&vin)?;
        let parsed_type = creators::parse_task_type(&task_type)?;
        let task = creators::create_task(&vin, notes, parsed_type, &details)?;

        let stored = self.repository.create(&task).await?;
        let id = stored.id().ok_or_else(|| {
            TaskDomainError::InvalidState("stored task has no identifier".to_owned())
        })?;
        tracing::info!(task_id = %id, task_type = %parsed_type, vin = %vin, "created maintenance task");
        Ok(id)
    }

    /// Replaces a task's status.
    ///
    /// Any status may follow any other; no transition rules are enforced.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::BadRequest`] error for a malformed identifier
    /// and a [`ErrorKind::NotFound`] error when no such task exists.
    pub async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> MaintenanceTaskResult<TaskSnapshot> {
        let id: TaskId = task_id.parse()?;
        let task = self.repository.update_status(id, status).await?;
        tracing::info!(task_id = %id, %status, "updated maintenance task status");
        Ok(TaskSnapshot::from(task))
    }

    /// Adds notes to a task, replacing any existing notes.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::BadRequest`] error for a malformed identifier
    /// and a [`ErrorKind::NotFound`] error when no such task exists.
    pub async fn add_or_update_notes(
        &self,
        task_id: &str,
        notes: impl Into<String>,
    ) -> MaintenanceTaskResult<TaskSnapshot> {
        let id: TaskId = task_id.parse()?;
        let task = self.repository.upsert_notes(id, Some(notes.into())).await?;
        tracing::info!(task_id = %id, "updated maintenance task notes");
        Ok(TaskSnapshot::from(task))
    }

    /// Retrieves one task.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::BadRequest`] error for a malformed identifier
    /// and a [`ErrorKind::NotFound`] error when no such task exists.
    pub async fn get_task_by_id(&self, task_id: &str) -> MaintenanceTaskResult<TaskSnapshot> {
        let id: TaskId = task_id.parse()?;
        tracing::debug!(task_id = %id, "fetching maintenance task");
        let task = self.repository.find_by_id(id).await?;
        Ok(TaskSnapshot::from(task))
    }

    /// Lists tasks, optionally restricted to one VIN.
    ///
    /// An absent or blank VIN lists every task.
    ///
    /// # Errors
    ///
    /// Propagates repository failures, including stored envelopes that no
    /// longer decode.
    pub async fn list_tasks(&self, vin: Option<&str>) -> MaintenanceTaskResult<Vec<TaskSnapshot>> {
        let tasks = match vin {
            Some(vin) if !vin.trim().is_empty() => {
                tracing::debug!(vin, "listing maintenance tasks for vehicle");
                self.repository.find_by_vin(vin).await?
            }
            _ => {
                tracing::debug!("listing all maintenance tasks");
                self.repository.find_all().await?
            }
        };
        Ok(tasks.iter().map(TaskSnapshot::from).collect())
    }
}

fn validate_vin(vin: &str) -> MaintenanceTaskResult<()> {
    if vin.chars().count() == VIN_LENGTH {
        Ok(())
    } else {
        Err(MaintenanceTaskError::InvalidVin(vin.to_owned()))
    }
}
