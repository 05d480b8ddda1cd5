//! Clock-type resolution.
//!
//! Given the employee's last clock event for the day (if any), the current
//! time, and a read-only snapshot of the day's session history, this module
//! decides the kind of the event a new scan represents. The resolution is a
//! pure function over a `(last kind, time band, history flags)` triple:
//! identical inputs always produce identical output, so reprocessing a scan
//! after a crash is idempotent.
//!
//! Database access never happens here. The session-history flags the 17:00
//! rule needs are injected as an already-resolved [`DayHistory`] snapshot;
//! when the store cannot supply them the caller passes `None` and the rule
//! is skipped rather than failing the scan.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::minute_of_day;
use crate::config::TimeBoundaries;
use crate::models::{ClockEvent, ClockEventKind};

/// Read-only flags describing the employee's session history for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHistory {
    /// Whether any completed in/out pair exists for the day.
    pub has_completed_sessions: bool,
    /// Whether an unmatched clock-in is open for the day.
    pub has_pending_clock_in: bool,
}

impl DayHistory {
    /// True when the day has no completed and no pending sessions.
    pub fn clean_slate(&self) -> bool {
        !self.has_completed_sessions && !self.has_pending_clock_in
    }
}

/// Coarse band of the day a scan minute falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// 00:00 up to the morning session start (08:00).
    EarlyMorning,
    /// Morning session start up to noon.
    Morning,
    /// Noon up to the evening window start (17:00).
    Afternoon,
    /// Evening window (17:00–22:00).
    Evening,
    /// Night-shift window start (22:00) to midnight.
    Night,
}

/// Classifies a minute-of-day into its [`TimeBand`].
pub fn time_band(minute: i64, boundaries: &TimeBoundaries) -> TimeBand {
    if minute >= boundaries.night_start {
        TimeBand::Night
    } else if minute >= boundaries.evening_start {
        TimeBand::Evening
    } else if minute >= boundaries.morning_end {
        TimeBand::Afternoon
    } else if minute >= boundaries.morning_start {
        TimeBand::Morning
    } else {
        TimeBand::EarlyMorning
    }
}

/// Classifies a scan with no prior event purely by its time of day.
fn classify_new_day(minute: i64, boundaries: &TimeBoundaries) -> ClockEventKind {
    match time_band(minute, boundaries) {
        TimeBand::Night => ClockEventKind::OvertimeIn,
        TimeBand::Evening => ClockEventKind::EveningIn,
        TimeBand::Afternoon => ClockEventKind::AfternoonIn,
        TimeBand::Morning | TimeBand::EarlyMorning => ClockEventKind::MorningIn,
    }
}

/// True when a scan closes a session opened yesterday evening.
///
/// A pending `_in` from 17:00 or later on an earlier calendar day, closed
/// by a scan in the 00:00–08:00 window, is an overnight continuation: the
/// resulting `_out` is attributed back to the originating day.
pub fn is_overnight_continuation(
    last_event: &ClockEvent,
    now: NaiveDateTime,
    boundaries: &TimeBoundaries,
) -> bool {
    last_event.kind.is_in()
        && time_band(minute_of_day(now), boundaries) == TimeBand::EarlyMorning
        && minute_of_day(last_event.timestamp) >= boundaries.evening_start
        && last_event.timestamp.date() != now.date()
}

/// Decides the kind of clock event a new scan represents.
///
/// The decision depends only on the last event, the scan time, and the
/// injected history flags:
///
/// - no last event: classify by time band alone;
/// - last event is an `_in`: the paired `_out` (also for overnight
///   continuations, whose day attribution is the caller's job);
/// - `morning_out`: unconditionally `afternoon_in` (lunch has no event);
/// - `afternoon_out`: a same-day scan rolls into `evening_in`, a later-day
///   scan starts a fresh day;
/// - `evening_out`/`overtime_out`: still inside the overtime windows starts
///   a new overtime segment, otherwise a fresh day.
///
/// One named exception precedes all of the above: a scan at exactly the
/// evening start with no completed or pending session that day is an
/// explicit overtime-only arrival and resolves to `evening_in`. The rule
/// only fires when `history` is available.
///
/// # Example
///
/// ```
/// use attendance_engine::resolver::resolve_clock_kind;
/// use attendance_engine::config::TimeBoundaries;
/// use attendance_engine::models::ClockEventKind;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let kind = resolve_clock_kind(None, now, None, &TimeBoundaries::default());
/// assert_eq!(kind, ClockEventKind::MorningIn);
/// ```
pub fn resolve_clock_kind(
    last_event: Option<&ClockEvent>,
    now: NaiveDateTime,
    history: Option<DayHistory>,
    boundaries: &TimeBoundaries,
) -> ClockEventKind {
    let minute = minute_of_day(now);

    // Explicit overtime-only arrival: exactly at the evening start with a
    // clean slate for the day. Skipped when the history flags are not
    // available so a read-side outage never blocks attendance capture.
    if let Some(history) = history {
        if minute == boundaries.evening_start && history.clean_slate() {
            return ClockEventKind::EveningIn;
        }
    }

    let Some(last) = last_event else {
        return classify_new_day(minute, boundaries);
    };

    match last.kind {
        ClockEventKind::MorningIn
        | ClockEventKind::AfternoonIn
        | ClockEventKind::EveningIn
        | ClockEventKind::OvertimeIn => last.kind.paired_out(),
        ClockEventKind::MorningOut => ClockEventKind::AfternoonIn,
        ClockEventKind::AfternoonOut => {
            if last.timestamp.date() == now.date() {
                // Any same-day scan after the regular shift closes is
                // overtime-seeking.
                ClockEventKind::EveningIn
            } else {
                classify_new_day(minute, boundaries)
            }
        }
        ClockEventKind::EveningOut | ClockEventKind::OvertimeOut => {
            if minute >= boundaries.night_start || minute < boundaries.early_morning_start {
                ClockEventKind::OvertimeIn
            } else if minute >= boundaries.evening_start {
                ClockEventKind::EveningIn
            } else {
                classify_new_day(minute, boundaries)
            }
        }
    }
}
