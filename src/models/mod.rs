//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod hours;
mod scan_outcome;

pub use clock_event::{ClockEvent, ClockEventKind, SessionFamily};
pub use hours::HoursResult;
pub use scan_outcome::ScanOutcome;
