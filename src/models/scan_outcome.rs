//! Result of processing a badge scan.

use serde::{Deserialize, Serialize};

use super::clock_event::ClockEvent;
use super::hours::HoursResult;

/// The fully-populated attendance record produced for one accepted scan.
///
/// For `_in` events the hours are always zero; credits are only realized
/// when the matching `_out` is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// The clock event created for this scan.
    pub event: ClockEvent,
    /// Regular/overtime credits realized by this event.
    pub hours: HoursResult,
    /// Whether the scan was a late arrival (morning/afternoon `_in` only).
    pub is_late: bool,
    /// Anomalies detected while processing (e.g. a missing counterpart
    /// clock-in). The scan is still accepted; the host decides how to
    /// surface these.
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockEventKind;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn test_outcome_serialization_defaults_warnings() {
        let timestamp =
            NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let outcome = ScanOutcome {
            event: ClockEvent::new(
                "emp_001",
                ClockEventKind::MorningIn,
                timestamp,
                NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            ),
            hours: HoursResult::zero(),
            is_late: false,
            warnings: vec![],
        };

        let json = serde_json::to_value(&outcome).unwrap();
        // Warnings are optional on the wire.
        let trimmed = {
            let mut value = json.clone();
            value.as_object_mut().unwrap().remove("warnings");
            value
        };
        let deserialized: ScanOutcome = serde_json::from_value(trimmed).unwrap();
        assert_eq!(deserialized, outcome);
    }
}
