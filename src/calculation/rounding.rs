//! Rounding policy for crediting worked minutes as hours.
//!
//! The domain deliberately uses three distinct rounding laws, selected by
//! session context:
//!
//! - **Per-hour lateness rule** for regular morning/afternoon hours: each
//!   wall-clock hour of the window is scored individually against the
//!   arrival's lateness and the minutes worked within that hour.
//! - **Simple half-hour rounding** for overtime accrued by regular-family
//!   sessions running into the evening or night windows.
//! - **Evening-session rounding** for evening-family sessions: a graced
//!   first hour plus 25/56-minute remainder brackets past 18:00. Pure
//!   night-shift sessions use a flat 15-minute grace deduction instead.
//!
//! All inputs are minutes in the normalized minute-of-day space produced by
//! the segmenter (clock-outs past midnight carry offsets above 1440).

use rust_decimal::Decimal;

use crate::config::{GraceRules, TimeBoundaries};

fn half() -> Decimal {
    Decimal::new(5, 1)
}

/// Minutes of overlap between two half-open intervals.
pub(crate) fn overlap_minutes(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> i64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0)
}

/// Scores a window hour-by-hour against the per-hour lateness rule.
///
/// For each hour bucket of `[window_start, window_end)`:
/// - lateness is `clock_in − bucket_start` (zero or negative means on time),
/// - a full credit requires lateness within the on-time grace and at least
///   `min_worked_per_hour` minutes worked inside the bucket,
/// - a half credit requires lateness within the half-credit limit and the
///   same minimum worked minutes,
/// - anything else earns nothing for that bucket.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::per_hour_lateness_credit;
/// use attendance_engine::config::GraceRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Clock-in 08:10 (6+ minutes late), clock-out 12:00: the 08:00 hour
/// // scores 0.5 and the remaining three hours score 1.0 each.
/// let credit = per_hour_lateness_credit(480, 720, 490, 720, &GraceRules::default());
/// assert_eq!(credit, Decimal::from_str("3.5").unwrap());
/// ```
pub fn per_hour_lateness_credit(
    window_start: i64,
    window_end: i64,
    clock_in: i64,
    clock_out: i64,
    grace: &GraceRules,
) -> Decimal {
    let mut credit = Decimal::ZERO;
    let mut bucket_start = window_start;

    while bucket_start < window_end {
        let bucket_end = (bucket_start + 60).min(window_end);
        let worked = overlap_minutes(clock_in, clock_out, bucket_start, bucket_end);

        if worked >= grace.min_worked_per_hour {
            // Lateness is fixed by the arrival; earlier buckets see a larger
            // value, buckets after the arrival see zero or negative.
            let lateness = clock_in - bucket_start;
            if lateness <= grace.on_time_grace {
                credit += Decimal::ONE;
            } else if lateness <= grace.half_credit_limit {
                credit += half();
            }
        }

        bucket_start = bucket_end;
    }

    credit
}

/// Rounds worked minutes with the simple half-hour rule.
///
/// `floor(minutes / 60)` full hours plus a half hour when the remainder
/// reaches the half-hour threshold. Negative intervals clamp to zero.
pub fn simple_half_hour_rounding(minutes: i64, grace: &GraceRules) -> Decimal {
    if minutes <= 0 {
        return Decimal::ZERO;
    }
    let mut hours = Decimal::from(minutes / 60);
    if minutes % 60 >= grace.half_hour_threshold {
        hours += half();
    }
    hours
}

/// Credits an evening-family session.
///
/// The first hour (17:00–18:00) is credited 1.0 when the arrival is within
/// the 15-minute grace, 0.5 when the arrival is still before 18:00, and 0
/// otherwise. Minutes past 18:00 are bracketed: a remainder of 56+ minutes
/// rounds to a full hour, 25+ to a half hour, anything less to zero.
pub fn evening_session_hours(
    clock_in: i64,
    clock_out: i64,
    boundaries: &TimeBoundaries,
    grace: &GraceRules,
) -> Decimal {
    if clock_out <= clock_in {
        return Decimal::ZERO;
    }

    let first_hour_end = boundaries.evening_start + 60;
    let mut hours = Decimal::ZERO;

    if clock_in <= boundaries.evening_start + grace.evening_first_hour_grace {
        hours += Decimal::ONE;
    } else if clock_in < first_hour_end {
        hours += half();
    }

    let beyond = clock_out - clock_in.max(first_hour_end);
    if beyond > 0 {
        hours += Decimal::from(beyond / 60);
        let remainder = beyond % 60;
        if remainder >= grace.evening_remainder_full {
            hours += Decimal::ONE;
        } else if remainder >= grace.evening_remainder_half {
            hours += half();
        }
    }

    hours
}

/// Credits a pure night-shift overtime session.
///
/// A flat grace deduction applies to the whole interval, with no further
/// hour-bucket rounding: `max(0, minutes − grace) / 60`.
pub fn overtime_flat_grace_hours(minutes: i64, grace: &GraceRules) -> Decimal {
    let credited = (minutes - grace.overtime_flat_grace).max(0);
    Decimal::from(credited) / Decimal::from(60)
}

/// Credits the early-morning bonus window (06:00–08:00, morning family only).
///
/// An arrival at or before 06:05 earns a flat 2.0 overtime hours for the
/// whole window; later arrivals have each constituent hour scored by the
/// per-hour lateness rule.
pub fn early_morning_bonus(
    clock_in: i64,
    clock_out: i64,
    boundaries: &TimeBoundaries,
    grace: &GraceRules,
) -> Decimal {
    if clock_in <= boundaries.early_morning_start + grace.early_bonus_grace {
        return Decimal::from(2);
    }
    per_hour_lateness_credit(
        boundaries.early_morning_start,
        boundaries.morning_start,
        clock_in,
        clock_out,
        grace,
    )
}
