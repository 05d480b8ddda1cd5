//! Current-time sources for the engine.
//!
//! The engine never reads the system clock directly: the host injects a
//! [`ClockSource`], and wraps it in a [`MonotonicClock`] so the "current
//! time" the engine sees never regresses even if the underlying system
//! clock moves backward (NTP corrections, manual adjustments).

use std::sync::Mutex;

use chrono::NaiveDateTime;

/// A source of the current local date and time.
pub trait ClockSource {
    /// Returns the current date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The host system clock, in local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock whose reading is set explicitly.
///
/// Used by tests and replays to drive the engine through scripted scan
/// times.
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock frozen at the given time.
    pub fn new(current: NaiveDateTime) -> Self {
        Self {
            current: Mutex::new(current),
        }
    }

    /// Moves the clock to the given time (backward moves are allowed here;
    /// [`MonotonicClock`] is what guards against regression).
    pub fn set(&self, time: NaiveDateTime) {
        *self.current.lock().expect("clock mutex poisoned") = time;
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().expect("clock mutex poisoned")
    }
}

impl<S: ClockSource> ClockSource for &S {
    fn now(&self) -> NaiveDateTime {
        S::now(self)
    }
}

impl<S: ClockSource> ClockSource for std::sync::Arc<S> {
    fn now(&self) -> NaiveDateTime {
        S::now(self)
    }
}

/// Wraps a clock source so its readings never go backward.
///
/// Every reading is clamped to the maximum value returned so far. The
/// invariant holds independently of the inner source's behavior: for any
/// sequence of inner readings, the sequence of [`ClockSource::now`] results
/// is non-decreasing.
///
/// # Example
///
/// ```
/// use attendance_engine::clock::{ClockSource, FixedClock, MonotonicClock};
/// use chrono::NaiveDateTime;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let inner = FixedClock::new(parse("2026-01-15 10:00:00"));
/// let clock = MonotonicClock::new(&inner);
///
/// assert_eq!(clock.now(), parse("2026-01-15 10:00:00"));
/// inner.set(parse("2026-01-15 09:00:00")); // system clock stepped back
/// assert_eq!(clock.now(), parse("2026-01-15 10:00:00"));
/// ```
#[derive(Debug)]
pub struct MonotonicClock<S> {
    inner: S,
    last: Mutex<Option<NaiveDateTime>>,
}

impl<S: ClockSource> MonotonicClock<S> {
    /// Wraps the given source.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }
}

impl<S: ClockSource> ClockSource for MonotonicClock<S> {
    fn now(&self) -> NaiveDateTime {
        let reading = self.inner.now();
        let mut last = self.last.lock().expect("clock mutex poisoned");
        let value = match *last {
            Some(previous) => reading.max(previous),
            None => reading,
        };
        *last = Some(value);
        value
    }
}
