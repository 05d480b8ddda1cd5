//! Attendance store capability interface.
//!
//! The engine never issues raw queries against whatever persistence the
//! host uses. It consumes the narrow capabilities defined here, and the
//! host adapts its storage to them. [`MemoryStore`] is the reference
//! implementation used by the integration tests.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::ClockEvent;

/// Read/append capabilities the engine needs from attendance storage.
///
/// Implementations must keep each employee/day event sequence in insertion
/// order. The engine itself never mutates stored events; it only appends
/// newly created ones.
pub trait AttendanceStore {
    /// Returns the most recent event attributed to the given employee/day.
    fn last_event_for_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<ClockEvent>>;

    /// Whether any completed in/out pair exists for the employee/day.
    fn has_completed_sessions_today(&self, employee_id: &str, date: NaiveDate)
    -> EngineResult<bool>;

    /// Whether an unmatched clock-in is open for the employee/day.
    fn has_pending_clock_in_today(&self, employee_id: &str, date: NaiveDate) -> EngineResult<bool>;

    /// Appends a newly created event.
    fn append(&mut self, event: ClockEvent) -> EngineResult<()>;
}

/// An in-memory [`AttendanceStore`].
///
/// Backs the integration tests and doubles as a reference implementation
/// for hosts. Enforces the at-most-one-pending-clock-in invariant on
/// append.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    events: HashMap<(String, NaiveDate), Vec<ClockEvent>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events attributed to the given employee/day, in insertion order.
    pub fn events_for_day(&self, employee_id: &str, date: NaiveDate) -> &[ClockEvent] {
        self.events
            .get(&(employee_id.to_string(), date))
            .map_or(&[], Vec::as_slice)
    }
}

impl AttendanceStore for MemoryStore {
    fn last_event_for_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<ClockEvent>> {
        Ok(self.events_for_day(employee_id, date).last().cloned())
    }

    fn has_completed_sessions_today(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<bool> {
        Ok(self
            .events_for_day(employee_id, date)
            .iter()
            .any(|event| event.kind.is_out()))
    }

    fn has_pending_clock_in_today(&self, employee_id: &str, date: NaiveDate) -> EngineResult<bool> {
        Ok(self
            .events_for_day(employee_id, date)
            .last()
            .is_some_and(|event| event.kind.is_in()))
    }

    fn append(&mut self, event: ClockEvent) -> EngineResult<()> {
        let day = self
            .events
            .entry((event.employee_id.clone(), event.date))
            .or_default();

        if event.kind.is_in() && day.last().is_some_and(|last| last.kind.is_in()) {
            return Err(EngineError::Store {
                operation: "append".to_string(),
                message: format!(
                    "employee '{}' already has a pending clock-in on {}",
                    event.employee_id, event.date
                ),
            });
        }

        day.push(event);
        Ok(())
    }
}
