//! Terminal outcome of a game module.

use serde::{Deserialize, Serialize};

/// The single pass/fail result a game module produces.
///
/// Every module starts at `Pending` and transitions exactly once to a
/// terminal value; the transition is guarded so that a second attempt
/// (e.g. a timer racing a direct user action) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The module is still running.
    Pending,
    /// The module finished and earned a cake piece.
    Success,
    /// The module finished without earning a cake piece.
    Failure,
}

impl GameOutcome {
    /// Returns `true` for `Success` and `Failure`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Pending)
    }
}
