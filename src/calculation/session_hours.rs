//! Session hours calculation.
//!
//! This module orchestrates the segmenter and the rounding policy to turn a
//! completed clock-in/clock-out pair into a regular/overtime credit pair for
//! one session.

use crate::config::EngineConfig;
use crate::models::{HoursResult, SessionFamily};

use super::rounding::{
    early_morning_bonus, evening_session_hours, overtime_flat_grace_hours,
    per_hour_lateness_credit, simple_half_hour_rounding,
};
use super::segmenter::{BoundaryWindow, normalized_minutes, segment_session};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Computes the credited hours for one completed session.
///
/// Morning/afternoon sessions accumulate regular hours from their core
/// windows under the per-hour lateness rule, plus simple-rounded overtime
/// for any spill into the evening or night windows (and the early-morning
/// bonus for qualifying morning arrivals). Evening and overtime sessions
/// are pure overtime: regular hours are always zero, and the single
/// undivided interval is rounded under the evening law or the flat
/// 15-minute grace respectively.
///
/// Inverted or empty intervals produce a zero result, never an error.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_session_hours;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::SessionFamily;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let clock_in = NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let clock_out = NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let hours = calculate_session_hours(clock_in, clock_out, SessionFamily::Morning, &EngineConfig::default());
/// assert_eq!(hours.regular, Decimal::from(8));
/// assert_eq!(hours.overtime, Decimal::ZERO);
/// ```
pub fn calculate_session_hours(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    family: SessionFamily,
    config: &EngineConfig,
) -> HoursResult {
    let boundaries = &config.boundaries;
    let grace = &config.grace;

    let (in_minute, out_minute) = normalized_minutes(clock_in, clock_out, family, boundaries);
    if out_minute <= in_minute {
        return HoursResult::zero();
    }

    match family {
        SessionFamily::Evening => HoursResult::new(
            Decimal::ZERO,
            evening_session_hours(in_minute, out_minute, boundaries, grace),
        ),
        SessionFamily::Overtime => HoursResult::new(
            Decimal::ZERO,
            overtime_flat_grace_hours(out_minute - in_minute, grace),
        ),
        SessionFamily::Morning | SessionFamily::Afternoon => {
            let mut regular = Decimal::ZERO;
            let mut overtime = Decimal::ZERO;

            for segment in segment_session(clock_in, clock_out, family, boundaries) {
                match segment.window {
                    BoundaryWindow::EarlyMorning => {
                        overtime += early_morning_bonus(in_minute, out_minute, boundaries, grace);
                    }
                    BoundaryWindow::Morning => {
                        regular += per_hour_lateness_credit(
                            boundaries.morning_start,
                            boundaries.morning_end,
                            in_minute,
                            out_minute,
                            grace,
                        );
                    }
                    BoundaryWindow::Afternoon => {
                        regular += per_hour_lateness_credit(
                            boundaries.afternoon_start,
                            boundaries.afternoon_end,
                            in_minute,
                            out_minute,
                            grace,
                        );
                    }
                    BoundaryWindow::EarlyAfternoon
                    | BoundaryWindow::Evening
                    | BoundaryWindow::NightShift => {
                        overtime += simple_half_hour_rounding(segment.minutes(), grace);
                    }
                }
            }

            HoursResult::new(regular, overtime)
        }
    }
}
