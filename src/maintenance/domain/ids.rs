//! Identifier types for the maintenance domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;

/// Repository-assigned identifier of a persisted maintenance task.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(NonZeroU64);

impl TaskId {
    /// The first identifier handed out by a fresh store.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Creates an identifier from a raw value.
    ///
    /// Returns `None` for zero, which is never a valid identifier.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(inner) => Some(Self(inner)),
            None => None,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.get()
    }

    /// Returns the identifier that follows this one.
    ///
    /// Returns `None` once the identifier space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(inner) => Some(Self(inner)),
            None => None,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an identifier string is not a positive integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier '{0}', expected a positive integer")]
pub struct ParseTaskIdError(pub String);

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseTaskIdError(value.to_owned()))
    }
}
