//! Shared fixtures for maintenance task unit tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::maintenance::creators::DetailPayload;

pub const VIN: &str = "1HGCM82633A004352";
pub const OTHER_VIN: &str = "WBA3A5C55CF256651";

/// Clock that advances one second every time it is read.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0)
            .single()
            .unwrap_or_default()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Self::epoch() + Duration::seconds(tick)
    }
}

/// Builds a detail payload from a JSON object literal.
pub fn payload(value: Value) -> DetailPayload {
    match value {
        Value::Object(map) => map,
        _ => DetailPayload::new(),
    }
}
