//! The 8-hour completion rule.
//!
//! An employee must be credited 8 regular hours before anything counts as
//! overtime, but only within a regular-shift day: evening and overtime
//! sessions always remain pure overtime regardless of volume.

use rust_decimal::Decimal;

use crate::models::{HoursResult, SessionFamily};

/// The daily regular-hours requirement.
pub const REQUIRED_REGULAR_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Applies the 8-hour completion rule to a session's credits.
///
/// For morning/afternoon sessions that under-deliver on regular hours,
/// `min(8 − regular, overtime)` overtime hours are converted into regular
/// hours. Sessions already at or above 8 regular hours, and all evening or
/// overtime sessions, are returned unchanged. The total credited hours are
/// always conserved.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::reallocate_regular_hours;
/// use attendance_engine::models::{HoursResult, SessionFamily};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = HoursResult::new(
///     Decimal::from_str("6.5").unwrap(),
///     Decimal::from_str("3.0").unwrap(),
/// );
/// let adjusted = reallocate_regular_hours(hours, SessionFamily::Afternoon);
/// assert_eq!(adjusted.regular, Decimal::from(8));
/// assert_eq!(adjusted.overtime, Decimal::from_str("1.5").unwrap());
/// ```
pub fn reallocate_regular_hours(hours: HoursResult, family: SessionFamily) -> HoursResult {
    if !family.is_regular() || hours.regular >= REQUIRED_REGULAR_HOURS {
        return hours;
    }

    let shortfall = REQUIRED_REGULAR_HOURS - hours.regular;
    let converted = shortfall.min(hours.overtime);
    HoursResult::new(hours.regular + converted, hours.overtime - converted)
}
