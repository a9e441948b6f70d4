//! Maze of Wishes — clamped grid navigation.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cakequest_core::clock::Clock;
use cakequest_core::error::GameError;
use cakequest_core::game::{GameId, GameModule};
use cakequest_core::input::{Direction, PlayerInput};
use cakequest_core::mount::{Element, Mount};
use cakequest_core::outcome::GameOutcome;
use cakequest_core::rng::DeterministicRng;
use cakequest_core::signal::{GameSignal, SignalKind};

/// Grid height.
pub const ROWS: u32 = 7;

/// Grid width.
pub const COLS: u32 = 9;

/// A cell position on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
}

/// Where the player starts.
pub const START: GridPosition = GridPosition { row: 3, col: 2 };

/// Where the wish letter waits.
pub const TARGET: GridPosition = GridPosition { row: 1, col: 7 };

/// Clamps one step along an axis to `[0, len - 1]`.
fn clamp_step(value: u32, delta: i32, len: u32) -> u32 {
    let moved = i64::from(value) + i64::from(delta);
    let clamped = moved.clamp(0, i64::from(len) - 1);
    // Clamped into u32 range by construction.
    u32::try_from(clamped).expect("clamped to grid bounds")
}

/// The Maze of Wishes game module.
///
/// Movement clamps at the edges; there is no fail state, only
/// success-or-continue.
#[derive(Debug)]
pub struct WishMaze {
    instance_id: Uuid,
    player: GridPosition,
    target: GridPosition,
    outcome: GameOutcome,
    pending_signals: Vec<GameSignal>,
}

impl WishMaze {
    /// Creates a fresh maze with the player at the start cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            player: START,
            target: TARGET,
            outcome: GameOutcome::Pending,
            pending_signals: Vec::new(),
        }
    }

    /// The player's current cell.
    #[must_use]
    pub fn player(&self) -> GridPosition {
        self.player
    }

    fn push_signal(&mut self, clock: &dyn Clock, kind: SignalKind) {
        self.pending_signals
            .push(GameSignal::new(GameId::Grid, self.instance_id, clock, kind));
    }

    /// First terminal transition wins; a second attempt is a no-op.
    fn conclude(&mut self, outcome: GameOutcome, clock: &dyn Clock) {
        if self.outcome.is_terminal() {
            debug!(game = GameId::Grid.as_str(), "duplicate conclusion ignored");
            return;
        }
        self.outcome = outcome;
        if outcome == GameOutcome::Success {
            self.push_signal(clock, SignalKind::PieceEarned);
        }
        self.push_signal(clock, SignalKind::Concluded { outcome });
    }

    fn step(&mut self, direction: Direction, clock: &dyn Clock) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::InputNotApplicable(
                "the maze has already been solved".to_owned(),
            ));
        }
        self.player = GridPosition {
            row: clamp_step(self.player.row, direction.row_delta(), ROWS),
            col: clamp_step(self.player.col, direction.col_delta(), COLS),
        };
        if self.player == self.target {
            self.conclude(GameOutcome::Success, clock);
        }
        Ok(())
    }
}

impl Default for WishMaze {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModule for WishMaze {
    fn game_id(&self) -> GameId {
        GameId::Grid
    }

    fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    fn handle_input(
        &mut self,
        input: &PlayerInput,
        clock: &dyn Clock,
        _rng: &mut dyn DeterministicRng,
    ) -> Result<(), GameError> {
        match input {
            PlayerInput::Move { direction } => self.step(*direction, clock),
            other => Err(GameError::InputNotApplicable(format!(
                "the maze has no use for {other:?}"
            ))),
        }
    }

    fn project(&self, mount: &mut dyn Mount) {
        if self.outcome.is_terminal() {
            return;
        }
        mount.append(Element::Heading("Maze of Wishes".to_owned()));
        mount.append(Element::Text(
            "Use the arrow keys to reach the glowing letter.".to_owned(),
        ));
        for row in 0..ROWS {
            for col in 0..COLS {
                let here = GridPosition { row, col };
                let glyph = if here == self.player {
                    Some('\u{2605}') // star
                } else if here == self.target {
                    Some('\u{2661}') // heart
                } else {
                    None
                };
                mount.append(Element::GridCell { row, col, glyph });
            }
        }
        mount.append(Element::Status(format!(
            "Position: {},{}",
            self.player.row, self.player.col
        )));
    }

    fn pending_signals(&self) -> &[GameSignal] {
        &self.pending_signals
    }

    fn drain_signals(&mut self) -> Vec<GameSignal> {
        std::mem::take(&mut self.pending_signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cakequest_test_support::{FixedClock, MockRng, RecordingMount};
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn step(maze: &mut WishMaze, direction: Direction) -> Result<(), GameError> {
        let mut rng = MockRng;
        maze.handle_input(&PlayerInput::Move { direction }, &fixed_clock(), &mut rng)
    }

    #[test]
    fn test_up_from_start_clamps_at_row_zero() {
        let mut maze = WishMaze::new();
        for _ in 0..4 {
            step(&mut maze, Direction::Up).unwrap();
        }

        // Start row is 3; four ups clamp at 0, never negative.
        assert_eq!(maze.player(), GridPosition { row: 0, col: 2 });
    }

    #[test]
    fn test_clamps_at_every_edge() {
        let mut maze = WishMaze::new();
        for _ in 0..20 {
            step(&mut maze, Direction::Left).unwrap();
        }
        assert_eq!(maze.player().col, 0);
        for _ in 0..20 {
            step(&mut maze, Direction::Down).unwrap();
        }
        assert_eq!(maze.player().row, ROWS - 1);
    }

    #[test]
    fn test_reaching_target_succeeds() {
        let mut maze = WishMaze::new();
        // From (3,2) to (1,7): two ups, five rights.
        step(&mut maze, Direction::Up).unwrap();
        step(&mut maze, Direction::Up).unwrap();
        for _ in 0..5 {
            step(&mut maze, Direction::Right).unwrap();
        }

        assert_eq!(maze.player(), TARGET);
        assert_eq!(maze.outcome(), GameOutcome::Success);
        let signals = maze.drain_signals();
        assert!(
            signals
                .iter()
                .any(|s| matches!(s.kind, SignalKind::PieceEarned))
        );
        assert!(signals.iter().any(|s| matches!(
            s.kind,
            SignalKind::Concluded {
                outcome: GameOutcome::Success
            }
        )));
    }

    #[test]
    fn test_moves_after_solving_are_rejected() {
        let mut maze = WishMaze::new();
        step(&mut maze, Direction::Up).unwrap();
        step(&mut maze, Direction::Up).unwrap();
        for _ in 0..5 {
            step(&mut maze, Direction::Right).unwrap();
        }
        assert_eq!(maze.outcome(), GameOutcome::Success);

        let result = step(&mut maze, Direction::Down);
        assert!(result.is_err());
        assert_eq!(maze.player(), TARGET);
    }

    #[test]
    fn test_wandering_never_fails() {
        let mut maze = WishMaze::new();
        for _ in 0..50 {
            step(&mut maze, Direction::Down).unwrap();
            step(&mut maze, Direction::Left).unwrap();
        }
        assert_eq!(maze.outcome(), GameOutcome::Pending);
    }

    #[test]
    fn test_projection_marks_player_and_target() {
        let maze = WishMaze::new();
        let mut mount = RecordingMount::new();
        maze.project(&mut mount);

        let cells: Vec<_> = mount
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::GridCell { row, col, glyph } => Some((*row, *col, *glyph)),
                _ => None,
            })
            .collect();
        assert_eq!(cells.len(), (ROWS * COLS) as usize);
        assert!(cells.contains(&(START.row, START.col, Some('\u{2605}'))));
        assert!(cells.contains(&(TARGET.row, TARGET.col, Some('\u{2661}'))));
    }
}
