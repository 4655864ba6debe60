//! Type-specific extension data attached to some maintenance tasks.

use super::{ParseEnumError, TaskType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wheel position a tire service applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TirePosition {
    /// Front axle, driver's left.
    FrontLeft,
    /// Front axle, right.
    FrontRight,
    /// Rear axle, left.
    RearLeft,
    /// Rear axle, right.
    RearRight,
    /// Spare wheel.
    Spare,
}

impl TirePosition {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontLeft => "FRONT_LEFT",
            Self::FrontRight => "FRONT_RIGHT",
            Self::RearLeft => "REAR_LEFT",
            Self::RearRight => "REAR_RIGHT",
            Self::Spare => "SPARE",
        }
    }
}

impl TryFrom<&str> for TirePosition {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "FRONT_LEFT" => Ok(Self::FrontLeft),
            "FRONT_RIGHT" => Ok(Self::FrontRight),
            "REAR_LEFT" => Ok(Self::RearLeft),
            "REAR_RIGHT" => Ok(Self::RearRight),
            "SPARE" => Ok(Self::Spare),
            _ => Err(ParseEnumError::new("tire position", value)),
        }
    }
}

impl fmt::Display for TirePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of work performed on a tire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TireServiceType {
    /// Move the tire to another position.
    Rotation,
    /// Fit a new tire.
    Replacement,
    /// Patch or plug a puncture.
    Repair,
    /// Balance the wheel assembly.
    Balancing,
    /// Adjust wheel alignment.
    Alignment,
}

impl TireServiceType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rotation => "ROTATION",
            Self::Replacement => "REPLACEMENT",
            Self::Repair => "REPAIR",
            Self::Balancing => "BALANCING",
            Self::Alignment => "ALIGNMENT",
        }
    }
}

impl TryFrom<&str> for TireServiceType {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ROTATION" => Ok(Self::Rotation),
            "REPLACEMENT" => Ok(Self::Replacement),
            "REPAIR" => Ok(Self::Repair),
            "BALANCING" => Ok(Self::Balancing),
            "ALIGNMENT" => Ok(Self::Alignment),
            _ => Err(ParseEnumError::new("tire service type", value)),
        }
    }
}

impl fmt::Display for TireServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool used to run a diagnostic scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScannerType {
    /// Generic OBD-II reader.
    #[serde(rename = "OBD_II")]
    ObdII,
    /// Manufacturer dealer tooling.
    ManufacturerSpecific,
    /// Portable handheld scanner.
    Handheld,
}

impl ScannerType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ObdII => "OBD_II",
            Self::ManufacturerSpecific => "MANUFACTURER_SPECIFIC",
            Self::Handheld => "HANDHELD",
        }
    }
}

impl TryFrom<&str> for ScannerType {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "OBD_II" => Ok(Self::ObdII),
            "MANUFACTURER_SPECIFIC" => Ok(Self::ManufacturerSpecific),
            "HANDHELD" => Ok(Self::Handheld),
            _ => Err(ParseEnumError::new("scanner type", value)),
        }
    }
}

impl fmt::Display for ScannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension data for a tire service task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TireServiceDetails {
    /// Wheel the work applies to.
    pub position: TirePosition,
    /// Kind of work performed.
    pub service_type: TireServiceType,
}

/// Extension data for a diagnostic scan task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticScanDetails {
    /// Fault codes reported by the scan, in the order supplied.
    pub error_codes: Vec<String>,
    /// Tool used for the scan.
    pub scanner_type: ScannerType,
}

/// Polymorphic extension data for task types that carry any.
///
/// ```compile_fail
/// use servicebay::maintenance::domain::TaskDetails;
///
/// let _ = serde_json::to_string(&None::<TaskDetails>);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetails {
    /// Tire service data.
    TireService(TireServiceDetails),
    /// Diagnostic scan data.
    DiagnosticScan(DiagnosticScanDetails),
}

impl TaskDetails {
    /// Returns the task type this detail payload belongs to.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        match self {
            Self::TireService(_) => TaskType::TireService,
            Self::DiagnosticScan(_) => TaskType::DiagnosticScan,
        }
    }
}

impl From<TireServiceDetails> for TaskDetails {
    fn from(details: TireServiceDetails) -> Self {
        Self::TireService(details)
    }
}

impl From<DiagnosticScanDetails> for TaskDetails {
    fn from(details: DiagnosticScanDetails) -> Self {
        Self::DiagnosticScan(details)
    }
}
