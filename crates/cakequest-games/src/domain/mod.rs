//! Game module state machines, one per variant.

use cakequest_core::clock::Clock;
use chrono::{DateTime, Duration, Utc};

pub mod grid;
pub mod mixing;
pub mod pattern;
pub mod track;
pub mod trivia;

/// Computes the deadline of a cosmetic pacing window.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn pacing_deadline(clock: &dyn Clock, after_ms: u64) -> DateTime<Utc> {
    // Pacing delays are fixed small constants; the cast cannot wrap.
    clock.now() + Duration::milliseconds(after_ms as i64)
}
