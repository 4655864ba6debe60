//! Error types for maintenance task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing maintenance task aggregates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The aggregate failed its own invariant check.
    ///
    /// No caller path defined by the factories produces this today; it
    /// signals an internal defect rather than bad input.
    #[error("invalid task state: {0}")]
    InvalidState(String),
}

/// Error returned while parsing one of the closed task enumerations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// The literal that matched no member.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
