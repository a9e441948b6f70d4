//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Nothing in this system is fallible I/O; every variant describes a
/// logically malformed interaction. The shell logs these at `debug`
/// and otherwise degrades silently, keeping the play experience
/// distraction-free while staying observable.
#[derive(Debug, Error)]
pub enum GameError {
    /// An input the active module cannot accept in its current phase.
    #[error("input not applicable: {0}")]
    InputNotApplicable(String),

    /// A game identifier string that names no known game.
    #[error("unknown game identifier: {0}")]
    UnknownGameId(String),

    /// A drag payload that names no known ingredient.
    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),
}
