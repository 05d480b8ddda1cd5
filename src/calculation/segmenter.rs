//! Session segmentation against the fixed wall-clock boundary windows.
//!
//! A raw clock-in/clock-out interval is split into the boundary windows it
//! overlaps so each portion can be rounded under the law that applies to it.
//! Work happens in a normalized minute-of-day space: a clock-out whose
//! minute-of-day precedes its clock-in's is pushed 1440 minutes forward,
//! which is the single overnight normalization used by every downstream
//! calculation.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::TimeBoundaries;
use crate::models::SessionFamily;

/// The fixed wall-clock windows a session interval can overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryWindow {
    /// Early-morning bonus window (06:00–08:00), morning family only.
    EarlyMorning,
    /// Core morning window (08:00–12:00), credited as regular hours.
    Morning,
    /// Pre-shift arrival window for afternoon sessions (08:00–13:00),
    /// credited as overtime.
    EarlyAfternoon,
    /// Core afternoon window (13:00–17:00), credited as regular hours.
    Afternoon,
    /// Evening overtime window (17:00–22:00).
    Evening,
    /// Night-shift window (22:00–06:00 next day).
    NightShift,
}

impl std::fmt::Display for BoundaryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryWindow::EarlyMorning => write!(f, "early_morning"),
            BoundaryWindow::Morning => write!(f, "morning"),
            BoundaryWindow::EarlyAfternoon => write!(f, "early_afternoon"),
            BoundaryWindow::Afternoon => write!(f, "afternoon"),
            BoundaryWindow::Evening => write!(f, "evening"),
            BoundaryWindow::NightShift => write!(f, "night_shift"),
        }
    }
}

/// One overlapped portion of a session interval, in normalized minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSegment {
    /// The boundary window this portion falls into.
    pub window: BoundaryWindow,
    /// Start of the overlap, minutes since midnight of the clock-in day.
    pub start: i64,
    /// End of the overlap, exclusive.
    pub end: i64,
}

impl SessionSegment {
    /// The worked minutes inside this segment.
    pub fn minutes(&self) -> i64 {
        self.end - self.start
    }
}

/// Minutes since midnight for a timestamp, ignoring seconds.
pub(crate) fn minute_of_day(timestamp: NaiveDateTime) -> i64 {
    i64::from(timestamp.hour()) * 60 + i64::from(timestamp.minute())
}

/// Normalizes an interval into the segmenter's minute space.
///
/// The clock-out is pushed past midnight when its minute-of-day precedes the
/// clock-in's. Afternoon-family clock-ins during the lunch gap are moved to
/// the start of the afternoon window (lunch is never counted).
pub(crate) fn normalized_minutes(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    family: SessionFamily,
    boundaries: &TimeBoundaries,
) -> (i64, i64) {
    let mut in_minute = minute_of_day(clock_in);
    let mut out_minute = minute_of_day(clock_out);
    if out_minute < in_minute {
        out_minute += 1440;
    }

    if family == SessionFamily::Afternoon
        && (boundaries.morning_end..boundaries.afternoon_start).contains(&in_minute)
    {
        in_minute = boundaries.afternoon_start.min(out_minute);
    }

    (in_minute, out_minute)
}

/// Splits a clock-in/clock-out interval into the boundary windows it overlaps.
///
/// Morning-family intervals are split against the early-morning bonus window
/// (activated only when the arrival falls inside its 05:55 lead), the core
/// morning window, the afternoon window (when the departure extends past the
/// lunch gap), and the evening/night overtime windows. Afternoon-family
/// intervals substitute an early-arrival window for the morning portion.
/// Evening and overtime families are never split: the whole interval is one
/// undivided overtime segment.
///
/// Segments are ordered chronologically, never overlap the lunch gap, and
/// zero-length overlaps are omitted.
pub fn segment_session(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    family: SessionFamily,
    boundaries: &TimeBoundaries,
) -> Vec<SessionSegment> {
    let (in_minute, out_minute) = normalized_minutes(clock_in, clock_out, family, boundaries);
    if out_minute <= in_minute {
        return Vec::new();
    }

    // Pure overtime families are never split against the regular windows.
    match family {
        SessionFamily::Evening => {
            return vec![SessionSegment {
                window: BoundaryWindow::Evening,
                start: in_minute,
                end: out_minute,
            }];
        }
        SessionFamily::Overtime => {
            return vec![SessionSegment {
                window: BoundaryWindow::NightShift,
                start: in_minute,
                end: out_minute,
            }];
        }
        SessionFamily::Morning | SessionFamily::Afternoon => {}
    }

    let mut segments = Vec::new();
    let mut push = |window: BoundaryWindow, window_start: i64, window_end: i64| {
        let start = in_minute.max(window_start);
        let end = out_minute.min(window_end);
        if end > start {
            segments.push(SessionSegment { window, start, end });
        }
    };

    match family {
        SessionFamily::Morning => {
            if (boundaries.early_morning_lead..boundaries.morning_start).contains(&in_minute) {
                push(
                    BoundaryWindow::EarlyMorning,
                    boundaries.early_morning_start,
                    boundaries.morning_start,
                );
            }
            push(
                BoundaryWindow::Morning,
                boundaries.morning_start,
                boundaries.morning_end,
            );
            if out_minute > boundaries.afternoon_start {
                push(
                    BoundaryWindow::Afternoon,
                    boundaries.afternoon_start,
                    boundaries.afternoon_end,
                );
            }
            push(
                BoundaryWindow::Evening,
                boundaries.evening_start,
                boundaries.night_start,
            );
            push(
                BoundaryWindow::NightShift,
                boundaries.night_start,
                boundaries.night_end,
            );
        }
        SessionFamily::Afternoon => {
            if in_minute < boundaries.morning_end {
                push(
                    BoundaryWindow::EarlyAfternoon,
                    boundaries.morning_start,
                    boundaries.afternoon_start,
                );
            }
            push(
                BoundaryWindow::Afternoon,
                boundaries.afternoon_start,
                boundaries.afternoon_end,
            );
            push(
                BoundaryWindow::Evening,
                boundaries.evening_start,
                boundaries.night_start,
            );
            push(
                BoundaryWindow::NightShift,
                boundaries.night_start,
                boundaries.night_end,
            );
        }
        SessionFamily::Evening | SessionFamily::Overtime => {}
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn boundaries() -> TimeBoundaries {
        TimeBoundaries::default()
    }

    fn windows(segments: &[SessionSegment]) -> Vec<BoundaryWindow> {
        segments.iter().map(|s| s.window).collect()
    }

    // ==========================================================================
    // SG-001: morning shift spanning lunch skips the lunch gap
    // ==========================================================================
    #[test]
    fn test_sg_001_full_day_morning_session_skips_lunch() {
        let segments = segment_session(
            make_datetime("2026-01-15", "08:00:00"),
            make_datetime("2026-01-15", "17:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );

        assert_eq!(
            windows(&segments),
            vec![BoundaryWindow::Morning, BoundaryWindow::Afternoon]
        );
        assert_eq!(segments[0].minutes(), 240);
        assert_eq!(segments[1].minutes(), 240);
        // No segment covers the 12:00-13:00 lunch gap.
        assert_eq!(segments[0].end, 720);
        assert_eq!(segments[1].start, 780);
    }

    // ==========================================================================
    // SG-002: clock-out within the lunch gap drops the afternoon window
    // ==========================================================================
    #[test]
    fn test_sg_002_out_within_lunch_has_no_afternoon_segment() {
        let segments = segment_session(
            make_datetime("2026-01-15", "08:00:00"),
            make_datetime("2026-01-15", "12:45:00"),
            SessionFamily::Morning,
            &boundaries(),
        );

        assert_eq!(windows(&segments), vec![BoundaryWindow::Morning]);
        assert_eq!(segments[0].minutes(), 240);
    }

    // ==========================================================================
    // SG-003: early arrival activates the bonus window
    // ==========================================================================
    #[test]
    fn test_sg_003_early_arrival_activates_bonus_window() {
        let segments = segment_session(
            make_datetime("2026-01-15", "06:00:00"),
            make_datetime("2026-01-15", "12:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );

        assert_eq!(
            windows(&segments),
            vec![BoundaryWindow::EarlyMorning, BoundaryWindow::Morning]
        );
        assert_eq!(segments[0].minutes(), 120);
    }

    #[test]
    fn test_sg_003b_lead_in_clamps_to_window_start() {
        // 05:55 arrival counts from 06:00
        let segments = segment_session(
            make_datetime("2026-01-15", "05:55:00"),
            make_datetime("2026-01-15", "12:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );
        assert_eq!(segments[0].window, BoundaryWindow::EarlyMorning);
        assert_eq!(segments[0].start, 360);
    }

    #[test]
    fn test_sg_003c_arrival_before_lead_skips_bonus_window() {
        // 05:30 arrival is outside the 05:55 lead; no bonus segment
        let segments = segment_session(
            make_datetime("2026-01-15", "05:30:00"),
            make_datetime("2026-01-15", "12:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );
        assert_eq!(windows(&segments), vec![BoundaryWindow::Morning]);
    }

    // ==========================================================================
    // SG-004: morning session running into the night splits per window
    // ==========================================================================
    #[test]
    fn test_sg_004_morning_session_running_late_splits_overtime_windows() {
        let segments = segment_session(
            make_datetime("2026-01-15", "08:00:00"),
            make_datetime("2026-01-15", "23:30:00"),
            SessionFamily::Morning,
            &boundaries(),
        );

        assert_eq!(
            windows(&segments),
            vec![
                BoundaryWindow::Morning,
                BoundaryWindow::Afternoon,
                BoundaryWindow::Evening,
                BoundaryWindow::NightShift,
            ]
        );
        assert_eq!(segments[2].minutes(), 300); // 17:00-22:00
        assert_eq!(segments[3].minutes(), 90); // 22:00-23:30
    }

    // ==========================================================================
    // SG-005: overnight rollover normalizes the clock-out past midnight
    // ==========================================================================
    #[test]
    fn test_sg_005_overnight_rollover() {
        let segments = segment_session(
            make_datetime("2026-01-15", "08:00:00"),
            make_datetime("2026-01-16", "02:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );

        let night = segments.last().unwrap();
        assert_eq!(night.window, BoundaryWindow::NightShift);
        assert_eq!(night.start, 1320);
        assert_eq!(night.end, 1560); // 02:00 next day
        assert_eq!(night.minutes(), 240);
    }

    // ==========================================================================
    // SG-006: afternoon lunch-gap arrival is normalized to 13:00
    // ==========================================================================
    #[test]
    fn test_sg_006_lunch_arrival_normalized() {
        let segments = segment_session(
            make_datetime("2026-01-15", "12:20:00"),
            make_datetime("2026-01-15", "17:00:00"),
            SessionFamily::Afternoon,
            &boundaries(),
        );

        assert_eq!(windows(&segments), vec![BoundaryWindow::Afternoon]);
        assert_eq!(segments[0].start, 780);
        assert_eq!(segments[0].minutes(), 240);
    }

    // ==========================================================================
    // SG-007: afternoon arrival before noon earns the early-arrival window
    // ==========================================================================
    #[test]
    fn test_sg_007_early_afternoon_arrival() {
        let segments = segment_session(
            make_datetime("2026-01-15", "10:00:00"),
            make_datetime("2026-01-15", "17:00:00"),
            SessionFamily::Afternoon,
            &boundaries(),
        );

        assert_eq!(
            windows(&segments),
            vec![BoundaryWindow::EarlyAfternoon, BoundaryWindow::Afternoon]
        );
        // Early-arrival overlap runs against 08:00-13:00
        assert_eq!(segments[0].start, 600);
        assert_eq!(segments[0].end, 780);
    }

    // ==========================================================================
    // SG-008: evening and overtime families are never split
    // ==========================================================================
    #[test]
    fn test_sg_008_pure_overtime_families_undivided() {
        let evening = segment_session(
            make_datetime("2026-01-15", "17:05:00"),
            make_datetime("2026-01-16", "01:00:00"),
            SessionFamily::Evening,
            &boundaries(),
        );
        assert_eq!(evening.len(), 1);
        assert_eq!(evening[0].window, BoundaryWindow::Evening);
        assert_eq!(evening[0].minutes(), 475);

        let night = segment_session(
            make_datetime("2026-01-15", "22:00:00"),
            make_datetime("2026-01-15", "23:50:00"),
            SessionFamily::Overtime,
            &boundaries(),
        );
        assert_eq!(night.len(), 1);
        assert_eq!(night[0].window, BoundaryWindow::NightShift);
        assert_eq!(night[0].minutes(), 110);
    }

    // ==========================================================================
    // SG-009: zero-length intervals produce no segments
    // ==========================================================================
    #[test]
    fn test_sg_009_zero_interval_empty() {
        let segments = segment_session(
            make_datetime("2026-01-15", "09:00:00"),
            make_datetime("2026-01-15", "09:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );
        assert!(segments.is_empty());
    }

    #[test]
    fn test_segments_ordered_and_disjoint() {
        let segments = segment_session(
            make_datetime("2026-01-15", "06:00:00"),
            make_datetime("2026-01-16", "01:00:00"),
            SessionFamily::Morning,
            &boundaries(),
        );
        for pair in segments.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_serialization() {
        let segment = SessionSegment {
            window: BoundaryWindow::NightShift,
            start: 1320,
            end: 1440,
        };
        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"window\":\"night_shift\""));
        let deserialized: SessionSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, segment);
    }
}
