//! Calculation logic for the attendance engine.
//!
//! This module contains the rounding policy with its three distinct
//! rounding laws, the session segmenter that splits an interval against the
//! fixed wall-clock windows, the session hours calculator that combines the
//! two per session family, the 8-hour completion rule, and the lateness
//! classifier.

mod lateness;
mod reallocation;
mod rounding;
mod segmenter;
mod session_hours;

pub use lateness::is_late;
pub use reallocation::{REQUIRED_REGULAR_HOURS, reallocate_regular_hours};
pub use rounding::{
    early_morning_bonus, evening_session_hours, overtime_flat_grace_hours,
    per_hour_lateness_credit, simple_half_hour_rounding,
};
pub use segmenter::{BoundaryWindow, SessionSegment, segment_session};
pub(crate) use segmenter::minute_of_day;
pub use session_hours::calculate_session_hours;
