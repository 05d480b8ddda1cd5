//! The scan-processing façade.
//!
//! [`AttendanceProcessor`] is the engine's sole externally callable
//! operation: given an employee badge scan "now", it resolves the kind of
//! clock event the scan represents, realizes hour credits when the event
//! closes a session, classifies lateness, appends the resulting event to
//! the store, and returns the fully-populated record.
//!
//! The caller is responsible for serializing concurrent scans of the same
//! badge; the processor itself is synchronous and performs no I/O beyond
//! the injected store and clock capabilities.

use tracing::{info, warn};

use crate::calculation::{calculate_session_hours, is_late, reallocate_regular_hours};
use crate::clock::ClockSource;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{ClockEvent, HoursResult, ScanOutcome};
use crate::resolver::{DayHistory, is_overnight_continuation, resolve_clock_kind};
use crate::store::AttendanceStore;

/// Processes badge scans into attendance records.
///
/// # Example
///
/// ```
/// use attendance_engine::clock::FixedClock;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::ClockEventKind;
/// use attendance_engine::processor::AttendanceProcessor;
/// use attendance_engine::store::MemoryStore;
/// use chrono::NaiveDateTime;
///
/// let clock = FixedClock::new(
///     NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let mut processor =
///     AttendanceProcessor::new(MemoryStore::new(), clock, EngineConfig::default()).unwrap();
///
/// let outcome = processor.process_scan("emp_001").unwrap();
/// assert_eq!(outcome.event.kind, ClockEventKind::MorningIn);
/// assert!(!outcome.is_late);
/// ```
#[derive(Debug)]
pub struct AttendanceProcessor<S, C> {
    store: S,
    clock: C,
    config: EngineConfig,
}

impl<S: AttendanceStore, C: ClockSource> AttendanceProcessor<S, C> {
    /// Creates a processor over the given capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Configuration`] when the
    /// configuration fails validation.
    pub fn new(store: S, clock: C, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            clock,
            config,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processes one badge scan for the given employee.
    ///
    /// Resolves the clock-event kind, computes the session's regular and
    /// overtime credits when the event is an `_out`, applies the 8-hour
    /// completion rule for regular families, classifies lateness, appends
    /// the event, and returns the record. Anomalies that do not justify
    /// rejecting the scan (a missing counterpart clock-in, clock skew) are
    /// reported as warnings on the outcome instead of errors.
    pub fn process_scan(&mut self, employee_id: &str) -> EngineResult<ScanOutcome> {
        let now = self.clock.now();
        let scan_date = now.date();
        let boundaries = &self.config.boundaries;

        let mut last_event = self.store.last_event_for_day(employee_id, scan_date)?;

        // An early-morning scan with a quiet day so far may be closing a
        // session opened yesterday evening.
        if last_event.is_none() {
            if let Some(previous_day) = scan_date.pred_opt() {
                if let Some(candidate) = self.store.last_event_for_day(employee_id, previous_day)? {
                    if is_overnight_continuation(&candidate, now, boundaries) {
                        last_event = Some(candidate);
                    }
                }
            }
        }

        let history = self.load_day_history(employee_id, scan_date);
        let kind = resolve_clock_kind(last_event.as_ref(), now, history, boundaries);

        let mut warnings = Vec::new();
        let mut attributed_date = scan_date;
        let mut hours = HoursResult::zero();

        if kind.is_out() {
            match last_event {
                Some(ref opening)
                    if opening.kind.is_in() && opening.kind.family() == kind.family() =>
                {
                    if is_overnight_continuation(opening, now, boundaries) {
                        attributed_date = opening.date;
                    }
                    if now < opening.timestamp {
                        warn!(
                            employee_id,
                            %kind,
                            "scan predates its clock-in; crediting zero hours"
                        );
                        warnings.push(format!(
                            "clock-out at {} predates clock-in at {}",
                            now, opening.timestamp
                        ));
                    } else {
                        hours = calculate_session_hours(
                            opening.timestamp,
                            now,
                            kind.family(),
                            &self.config,
                        );
                        if kind.family().is_regular() {
                            hours = reallocate_regular_hours(hours, kind.family());
                        }
                    }
                }
                _ => {
                    warn!(
                        employee_id,
                        %kind,
                        "no matching clock-in for clock-out; crediting zero hours"
                    );
                    warnings.push(format!("no matching clock-in found for {kind}"));
                }
            }
        }

        let late = is_late(kind, now, &self.config);
        let event = ClockEvent::new(employee_id, kind, now, attributed_date);
        self.store.append(event.clone())?;

        info!(
            employee_id,
            %kind,
            date = %attributed_date,
            regular = %hours.regular,
            overtime = %hours.overtime,
            late,
            "accepted scan"
        );

        Ok(ScanOutcome {
            event,
            hours,
            is_late: late,
            warnings,
        })
    }

    /// Loads the day's history flags, degrading to `None` when the store
    /// cannot answer so a read-side outage never blocks attendance capture.
    fn load_day_history(&self, employee_id: &str, date: chrono::NaiveDate) -> Option<DayHistory> {
        let completed = self.store.has_completed_sessions_today(employee_id, date);
        let pending = self.store.has_pending_clock_in_today(employee_id, date);
        match (completed, pending) {
            (Ok(has_completed_sessions), Ok(has_pending_clock_in)) => Some(DayHistory {
                has_completed_sessions,
                has_pending_clock_in,
            }),
            (completed, pending) => {
                let message = completed.err().or(pending.err()).map(|e| e.to_string());
                warn!(
                    employee_id,
                    %date,
                    error = message.as_deref().unwrap_or("unknown"),
                    "day history unavailable; skipping the 17:00 arrival rule"
                );
                None
            }
        }
    }
}
