//! Task type and lifecycle status enumerations.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of maintenance work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// Engine oil and filter change.
    OilChange,
    /// Brake pad, disc and fluid inspection.
    BrakeInspection,
    /// Work on a single tire; carries [`TireServiceDetails`](super::TireServiceDetails).
    TireService,
    /// On-board diagnostic scan; carries
    /// [`DiagnosticScanDetails`](super::DiagnosticScanDetails).
    DiagnosticScan,
}

impl TaskType {
    /// Every task type, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::OilChange,
        Self::BrakeInspection,
        Self::TireService,
        Self::DiagnosticScan,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OilChange => "OIL_CHANGE",
            Self::BrakeInspection => "BRAKE_INSPECTION",
            Self::TireService => "TIRE_SERVICE",
            Self::DiagnosticScan => "DIAGNOSTIC_SCAN",
        }
    }

    /// Returns `true` when tasks of this type must carry details.
    #[must_use]
    pub const fn carries_details(self) -> bool {
        matches!(self, Self::TireService | Self::DiagnosticScan)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "OIL_CHANGE" => Ok(Self::OilChange),
            "BRAKE_INSPECTION" => Ok(Self::BrakeInspection),
            "TIRE_SERVICE" => Ok(Self::TireService),
            "DIAGNOSTIC_SCAN" => Ok(Self::DiagnosticScan),
            _ => Err(ParseEnumError::new("task type", value)),
        }
    }
}

/// Lifecycle status of a maintenance task.
///
/// Any status may follow any other; no transition table is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Recorded but not started.
    Created,
    /// Work is underway. Every newly created task starts here.
    InProgress,
    /// Work has finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CREATED" => Ok(Self::Created),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseEnumError::new("task status", value)),
        }
    }
}
