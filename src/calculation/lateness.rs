//! Lateness classification for clock-in events.

use chrono::NaiveDateTime;

use crate::config::EngineConfig;
use crate::models::ClockEventKind;

use super::segmenter::minute_of_day;

/// Determines whether a clock-in scan counts as a late arrival.
///
/// Only `morning_in` and `afternoon_in` have a lateness concept. A morning
/// arrival is on time inside the early-morning bonus grace (06:00–06:05) or
/// up to five minutes past the session start (08:05); an afternoon arrival
/// is on time up to 13:05. Every other kind, including all `_out` kinds and
/// overtime arrivals, is never late.
///
/// For a fixed kind this is a step function of the scan time with a single
/// discontinuity at the grace threshold.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_late;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::ClockEventKind;
/// use chrono::NaiveDateTime;
///
/// let scan = NaiveDateTime::parse_from_str("2026-01-15 08:06:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_late(ClockEventKind::MorningIn, scan, &EngineConfig::default()));
/// ```
pub fn is_late(kind: ClockEventKind, timestamp: NaiveDateTime, config: &EngineConfig) -> bool {
    let minute = minute_of_day(timestamp);
    let boundaries = &config.boundaries;
    let grace = &config.grace;

    match kind {
        ClockEventKind::MorningIn => {
            let early_window = boundaries.early_morning_start
                ..=boundaries.early_morning_start + grace.early_bonus_grace;
            if early_window.contains(&minute) {
                return false;
            }
            minute > boundaries.morning_start + grace.on_time_grace
        }
        ClockEventKind::AfternoonIn => minute > boundaries.afternoon_start + grace.on_time_grace,
        _ => false,
    }
}
