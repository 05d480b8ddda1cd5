//! Time-and-attendance engine.
//!
//! This crate decides what kind of clock event a badge scan represents and
//! converts completed clock-in/clock-out pairs into regular and overtime
//! hour credits under the shift, grace-period, and rounding rules of the
//! attendance domain. Storage, synchronization, and presentation are the
//! host's concern; the engine consumes them as capability traits.

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod processor;
pub mod resolver;
pub mod store;
