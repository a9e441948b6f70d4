//! Test clocks — deterministic `Clock` implementations.

use std::sync::Mutex;

use cakequest_core::clock::Clock;
use chrono::{DateTime, Duration, Utc};

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed step on every `now()` call.
///
/// Pacing deadlines are stored as `now() + delay` and compared against
/// a later `now()`; a stepping clock lets a test cross a deadline
/// without real sleeping. The first call returns the start instant.
#[derive(Debug)]
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    /// Create a clock starting at `start` that advances `step_ms`
    /// milliseconds per call.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step_ms: i64) -> Self {
        Self {
            current: Mutex::new(start),
            step: Duration::milliseconds(step_ms),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let now = *current;
        *current = now + self.step;
        now
    }
}
