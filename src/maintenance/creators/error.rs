//! Errors raised while validating detail payloads and building tasks.

use crate::maintenance::domain::{ParseEnumError, TaskDomainError};
use thiserror::Error;

/// Errors returned by task creators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreateTaskError {
    /// A required payload field is absent.
    #[error("{field} is required for this task type")]
    MissingField {
        /// Payload key that was expected.
        field: &'static str,
    },

    /// A payload field is present but has the wrong shape or value.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Payload key that failed validation.
        field: &'static str,
        /// Description of the validation failure.
        reason: String,
    },

    /// The requested task type literal names no known type.
    #[error(transparent)]
    UnknownTaskType(ParseEnumError),

    /// The aggregate factory rejected the assembled task.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

impl CreateTaskError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
