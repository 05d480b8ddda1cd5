//! Configuration types for the attendance engine.
//!
//! All values are minute-of-day offsets (minutes since 00:00) or minute
//! durations. Windows that extend past midnight, such as the night shift,
//! use offsets greater than 1440.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fixed wall-clock session windows, in minutes since midnight.
///
/// These are read-only inputs to every calculation; they are deployment
/// constants, not values inferred from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBoundaries {
    /// Start of the early-morning bonus window (06:00).
    pub early_morning_start: i64,
    /// Earliest clock-in that activates the early-morning window (05:55).
    pub early_morning_lead: i64,
    /// Start of the morning session (08:00).
    pub morning_start: i64,
    /// End of the morning session / start of lunch (12:00).
    pub morning_end: i64,
    /// End of the lunch gap / start of the afternoon session (13:00).
    pub afternoon_start: i64,
    /// End of the afternoon session (17:00).
    pub afternoon_end: i64,
    /// Start of the evening overtime window (17:00).
    pub evening_start: i64,
    /// End of the evening overtime window / start of the night shift (22:00).
    pub night_start: i64,
    /// End of the night-shift window, past midnight (30:00 = 06:00 next day).
    pub night_end: i64,
}

impl Default for TimeBoundaries {
    fn default() -> Self {
        Self {
            early_morning_start: 6 * 60,
            early_morning_lead: 5 * 60 + 55,
            morning_start: 8 * 60,
            morning_end: 12 * 60,
            afternoon_start: 13 * 60,
            afternoon_end: 17 * 60,
            evening_start: 17 * 60,
            night_start: 22 * 60,
            night_end: 30 * 60,
        }
    }
}

/// Grace-period and rounding thresholds, in minutes unless noted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraceRules {
    /// Lateness up to this many minutes still earns a full hour credit (5).
    pub on_time_grace: i64,
    /// Lateness up to this many minutes earns a half hour credit (30).
    pub half_credit_limit: i64,
    /// Minimum minutes worked within an hour bucket to earn any credit (30).
    pub min_worked_per_hour: i64,
    /// Remainder minutes that round up to a half hour in simple rounding (30).
    pub half_hour_threshold: i64,
    /// Evening first-hour full-credit grace past 17:00 (15, i.e. 17:15).
    pub evening_first_hour_grace: i64,
    /// Evening remainder minutes that earn a half hour credit (25).
    pub evening_remainder_half: i64,
    /// Evening remainder minutes that earn a full hour credit (56).
    pub evening_remainder_full: i64,
    /// Flat deduction applied to pure overtime sessions (15).
    pub overtime_flat_grace: i64,
    /// Early-morning arrival grace past 06:00 for the flat 2.0 bonus (5).
    pub early_bonus_grace: i64,
}

impl Default for GraceRules {
    fn default() -> Self {
        Self {
            on_time_grace: 5,
            half_credit_limit: 30,
            min_worked_per_hour: 30,
            half_hour_threshold: 30,
            evening_first_hour_grace: 15,
            evening_remainder_half: 25,
            evening_remainder_full: 56,
            overtime_flat_grace: 15,
            early_bonus_grace: 5,
        }
    }
}

/// The full engine configuration: session windows plus grace/rounding rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed session windows.
    pub boundaries: TimeBoundaries,
    /// Grace-period and rounding thresholds.
    pub grace: GraceRules,
}

impl EngineConfig {
    /// Checks the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] when a window's end does not
    /// follow its start, windows are out of order, or a grace value cannot
    /// fit inside the window it applies to.
    pub fn validate(&self) -> EngineResult<()> {
        let b = &self.boundaries;
        let ordered = b.early_morning_lead <= b.early_morning_start
            && b.early_morning_start < b.morning_start
            && b.morning_start < b.morning_end
            && b.morning_end < b.afternoon_start
            && b.afternoon_start < b.afternoon_end
            && b.afternoon_end <= b.evening_start
            && b.evening_start < b.night_start
            && b.night_start < b.night_end;
        if !ordered {
            return Err(EngineError::Configuration {
                message: "session windows must be strictly ordered within the day".to_string(),
            });
        }
        if b.night_end > 2 * 1440 {
            return Err(EngineError::Configuration {
                message: "night shift may not extend past the following midnight".to_string(),
            });
        }

        let g = &self.grace;
        let bounded = (0..=60).contains(&g.on_time_grace)
            && g.on_time_grace <= g.half_credit_limit
            && g.half_credit_limit <= 60
            && (1..=60).contains(&g.min_worked_per_hour)
            && (0..60).contains(&g.half_hour_threshold)
            && (0..60).contains(&g.evening_first_hour_grace)
            && g.evening_remainder_half <= g.evening_remainder_full
            && (0..60).contains(&g.evening_remainder_full)
            && g.overtime_flat_grace >= 0
            && g.early_bonus_grace >= 0;
        if !bounded {
            return Err(EngineError::Configuration {
                message: "grace thresholds must fit within their hour windows".to_string(),
            });
        }

        Ok(())
    }
}
