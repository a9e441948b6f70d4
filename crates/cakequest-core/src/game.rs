//! The game module lifecycle contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::GameError;
use crate::input::PlayerInput;
use crate::mount::Mount;
use crate::outcome::GameOutcome;
use crate::rng::DeterministicRng;
use crate::signal::GameSignal;

/// Identifier of a game variant: a closed set, dispatched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    /// The riddle gate (trivia).
    Trivia,
    /// The potion mixer (drag-and-drop set puzzle).
    Mixing,
    /// The crystal cake (pattern memory).
    Pattern,
    /// The maze of wishes (grid navigation).
    Grid,
    /// The birthday board (track race).
    Track,
}

impl GameId {
    /// Every game variant, in menu order.
    pub const ALL: [GameId; 5] = [
        GameId::Trivia,
        GameId::Mixing,
        GameId::Pattern,
        GameId::Grid,
        GameId::Track,
    ];

    /// Stable identifier string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameId::Trivia => "trivia",
            GameId::Mixing => "mixing",
            GameId::Pattern => "pattern",
            GameId::Grid => "grid",
            GameId::Track => "track",
        }
    }

    /// Player-facing title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameId::Trivia => "Riddle Gate",
            GameId::Mixing => "Potion Mixer",
            GameId::Pattern => "Crystal Cake",
            GameId::Grid => "Maze of Wishes",
            GameId::Track => "Birthday Board",
        }
    }

    /// Parses an identifier string from an embedding boundary.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownGameId` if the string names no game.
    pub fn parse(value: &str) -> Result<Self, GameError> {
        match value {
            "trivia" => Ok(GameId::Trivia),
            "mixing" => Ok(GameId::Mixing),
            "pattern" => Ok(GameId::Pattern),
            "grid" => Ok(GameId::Grid),
            "track" => Ok(GameId::Track),
            other => Err(GameError::UnknownGameId(other.to_owned())),
        }
    }
}

/// The lifecycle contract shared by all five game variants.
///
/// A module is constructed fresh when opened, runs to a terminal
/// outcome through player inputs only (it never times itself out), and
/// communicates outward exclusively through its pending signals:
/// `PieceEarned` at most once iff the outcome is `Success`, then
/// `Concluded` exactly once. After concluding, every further input is
/// rejected.
pub trait GameModule: Send + Sync + std::fmt::Debug {
    /// Returns the variant identifier.
    fn game_id(&self) -> GameId;

    /// Returns the unique identifier of this module instance.
    fn instance_id(&self) -> Uuid;

    /// Returns the current outcome.
    fn outcome(&self) -> GameOutcome;

    /// Feeds one player input through the module's state machine.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the input is not applicable in the
    /// current phase; the module's state is unchanged in that case.
    fn handle_input(
        &mut self,
        input: &PlayerInput,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), GameError>;

    /// Projects the current state into the mount point, append-only.
    ///
    /// Rendering is a pure function of state: the same state always
    /// projects the same elements, and projecting mutates nothing.
    fn project(&self, mount: &mut dyn Mount);

    /// Returns signals emitted but not yet drained.
    fn pending_signals(&self) -> &[GameSignal];

    /// Removes and returns all pending signals.
    fn drain_signals(&mut self) -> Vec<GameSignal>;
}
