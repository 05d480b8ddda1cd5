//! Clock event model and related types.
//!
//! This module defines the [`ClockEventKind`] and [`SessionFamily`] enums and
//! the [`ClockEvent`] struct that together represent a single badge scan
//! accepted by the engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a clock event.
///
/// Kinds come in matched `_in`/`_out` pairs, one pair per session family.
/// The kind of an event is decided exactly once, when the scan is accepted,
/// and never revised afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventKind {
    /// Start of a morning session.
    MorningIn,
    /// End of a morning session.
    MorningOut,
    /// Start of an afternoon session.
    AfternoonIn,
    /// End of an afternoon session.
    AfternoonOut,
    /// Start of an evening overtime session (17:00 onward).
    EveningIn,
    /// End of an evening overtime session.
    EveningOut,
    /// Start of a night-shift overtime session (22:00 onward).
    OvertimeIn,
    /// End of a night-shift overtime session.
    OvertimeOut,
}

impl ClockEventKind {
    /// Returns the session family this kind belongs to.
    pub fn family(&self) -> SessionFamily {
        match self {
            ClockEventKind::MorningIn | ClockEventKind::MorningOut => SessionFamily::Morning,
            ClockEventKind::AfternoonIn | ClockEventKind::AfternoonOut => SessionFamily::Afternoon,
            ClockEventKind::EveningIn | ClockEventKind::EveningOut => SessionFamily::Evening,
            ClockEventKind::OvertimeIn | ClockEventKind::OvertimeOut => SessionFamily::Overtime,
        }
    }

    /// Returns true if this is a clock-in kind.
    pub fn is_in(&self) -> bool {
        matches!(
            self,
            ClockEventKind::MorningIn
                | ClockEventKind::AfternoonIn
                | ClockEventKind::EveningIn
                | ClockEventKind::OvertimeIn
        )
    }

    /// Returns true if this is a clock-out kind.
    pub fn is_out(&self) -> bool {
        !self.is_in()
    }

    /// Returns the `_out` kind that closes this `_in` kind.
    ///
    /// For `_out` kinds this returns the kind itself, so the result is always
    /// the `_out` kind of the same family.
    pub fn paired_out(&self) -> ClockEventKind {
        match self.family() {
            SessionFamily::Morning => ClockEventKind::MorningOut,
            SessionFamily::Afternoon => ClockEventKind::AfternoonOut,
            SessionFamily::Evening => ClockEventKind::EveningOut,
            SessionFamily::Overtime => ClockEventKind::OvertimeOut,
        }
    }

    /// Returns the `_in` kind that opens this kind's family.
    pub fn paired_in(&self) -> ClockEventKind {
        match self.family() {
            SessionFamily::Morning => ClockEventKind::MorningIn,
            SessionFamily::Afternoon => ClockEventKind::AfternoonIn,
            SessionFamily::Evening => ClockEventKind::EveningIn,
            SessionFamily::Overtime => ClockEventKind::OvertimeIn,
        }
    }
}

impl std::fmt::Display for ClockEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ClockEventKind::MorningIn => "morning_in",
            ClockEventKind::MorningOut => "morning_out",
            ClockEventKind::AfternoonIn => "afternoon_in",
            ClockEventKind::AfternoonOut => "afternoon_out",
            ClockEventKind::EveningIn => "evening_in",
            ClockEventKind::EveningOut => "evening_out",
            ClockEventKind::OvertimeIn => "overtime_in",
            ClockEventKind::OvertimeOut => "overtime_out",
        };
        write!(f, "{label}")
    }
}

/// A session family groups a matched `_in`/`_out` kind pair.
///
/// Morning and afternoon are "regular" families subject to the 8-hour
/// completion rule; evening and overtime are pure overtime families whose
/// hours are never reallocated into regular hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionFamily {
    /// Regular morning session (08:00–12:00 core window).
    Morning,
    /// Regular afternoon session (13:00–17:00 core window).
    Afternoon,
    /// Evening overtime session (17:00–22:00 core window).
    Evening,
    /// Night-shift overtime session (22:00 onward).
    Overtime,
}

impl SessionFamily {
    /// Returns true for the morning/afternoon families whose hours count
    /// toward the 8-hour daily requirement.
    pub fn is_regular(&self) -> bool {
        matches!(self, SessionFamily::Morning | SessionFamily::Afternoon)
    }
}

impl std::fmt::Display for SessionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionFamily::Morning => write!(f, "morning"),
            SessionFamily::Afternoon => write!(f, "afternoon"),
            SessionFamily::Evening => write!(f, "evening"),
            SessionFamily::Overtime => write!(f, "overtime"),
        }
    }
}

/// A single accepted badge scan.
///
/// `date` is the calendar day the event is attributed to, which is not
/// necessarily the timestamp's calendar day: an `_out` that closes an
/// overnight session is attributed back to the originating day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Unique identifier for the event.
    pub id: Uuid,
    /// Identifier of the employee that produced the scan.
    pub employee_id: String,
    /// The kind decided for this event at creation time.
    pub kind: ClockEventKind,
    /// The wall-clock moment of the scan.
    pub timestamp: NaiveDateTime,
    /// The calendar day the event is attributed to.
    pub date: NaiveDate,
}

impl ClockEvent {
    /// Creates a new clock event attributed to the given day.
    pub fn new(
        employee_id: impl Into<String>,
        kind: ClockEventKind,
        timestamp: NaiveDateTime,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            kind,
            timestamp,
            date,
        }
    }

    /// Returns the session family of this event's kind.
    pub fn family(&self) -> SessionFamily {
        self.kind.family()
    }
}
