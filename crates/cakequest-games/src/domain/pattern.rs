//! Crystal Cake — grow-and-repeat pattern memory.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use cakequest_core::clock::Clock;
use cakequest_core::error::GameError;
use cakequest_core::game::{GameId, GameModule};
use cakequest_core::input::{PadColor, PlayerInput};
use cakequest_core::mount::{Element, Mount};
use cakequest_core::outcome::GameOutcome;
use cakequest_core::rng::DeterministicRng;
use cakequest_core::signal::{GameSignal, SignalKind};

use super::pacing_deadline;

/// Reproducing a sequence of this length wins the game.
pub const TARGET_LENGTH: usize = 4;

/// Replay pacing per sequence step, in milliseconds.
pub const STEP_MS: u64 = 600;

/// Crystal Cake phase state machine.
#[derive(Debug, Clone)]
enum PatternPhase {
    /// No round in flight; waiting for `StartRound`.
    Idle,
    /// The sequence is being shown; pad presses are ignored until the
    /// pacing deadline passes.
    Replaying { until: DateTime<Utc> },
    /// The player is reproducing the sequence.
    Awaiting,
    /// A round was reproduced; the next one starts on the ripe tick.
    Interlude { until: DateTime<Utc> },
    /// Terminal.
    Concluded,
}

/// The Crystal Cake game module.
#[derive(Debug)]
pub struct CrystalCake {
    instance_id: Uuid,
    sequence: Vec<PadColor>,
    cursor: usize,
    phase: PatternPhase,
    outcome: GameOutcome,
    pending_signals: Vec<GameSignal>,
}

impl CrystalCake {
    /// Creates a fresh game with an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            sequence: Vec::new(),
            cursor: 0,
            phase: PatternPhase::Idle,
            outcome: GameOutcome::Pending,
            pending_signals: Vec::new(),
        }
    }

    /// The sequence accumulated so far.
    #[must_use]
    pub fn sequence(&self) -> &[PadColor] {
        &self.sequence
    }

    fn push_signal(&mut self, clock: &dyn Clock, kind: SignalKind) {
        self.pending_signals
            .push(GameSignal::new(GameId::Pattern, self.instance_id, clock, kind));
    }

    /// First terminal transition wins; a second attempt is a no-op.
    fn conclude(&mut self, outcome: GameOutcome, clock: &dyn Clock) {
        if self.outcome.is_terminal() {
            debug!(game = GameId::Pattern.as_str(), "duplicate conclusion ignored");
            return;
        }
        self.outcome = outcome;
        if outcome == GameOutcome::Success {
            self.push_signal(clock, SignalKind::PieceEarned);
        }
        self.push_signal(clock, SignalKind::Concluded { outcome });
        self.phase = PatternPhase::Concluded;
    }

    /// Appends one random pad and replays the grown sequence.
    #[allow(clippy::cast_possible_truncation)]
    fn next_round(&mut self, clock: &dyn Clock, rng: &mut dyn DeterministicRng) {
        let draw = rng.next_u32_range(0, 3);
        self.sequence.push(PadColor::from_draw(draw));
        self.cursor = 0;
        // The sequence never exceeds TARGET_LENGTH steps.
        let replay_ms = STEP_MS * self.sequence.len() as u64;
        self.phase = PatternPhase::Replaying {
            until: pacing_deadline(clock, replay_ms),
        };
        self.push_signal(clock, SignalKind::TickRequested { after_ms: replay_ms });
    }

    fn start_round(
        &mut self,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), GameError> {
        if !matches!(self.phase, PatternPhase::Idle) {
            return Err(GameError::InputNotApplicable(
                "a round is already in flight".to_owned(),
            ));
        }
        self.next_round(clock, rng);
        Ok(())
    }

    fn tick(&mut self, clock: &dyn Clock, rng: &mut dyn DeterministicRng) -> Result<(), GameError> {
        match &self.phase {
            PatternPhase::Replaying { until } => {
                if clock.now() < *until {
                    return Err(GameError::InputNotApplicable(
                        "tick arrived before the replay finished".to_owned(),
                    ));
                }
                self.phase = PatternPhase::Awaiting;
                Ok(())
            }
            PatternPhase::Interlude { until } => {
                if clock.now() < *until {
                    return Err(GameError::InputNotApplicable(
                        "tick arrived before the interlude ended".to_owned(),
                    ));
                }
                self.next_round(clock, rng);
                Ok(())
            }
            _ => Err(GameError::InputNotApplicable(
                "no pacing window is open".to_owned(),
            )),
        }
    }

    fn press(&mut self, pad: PadColor, clock: &dyn Clock) -> Result<(), GameError> {
        match self.phase {
            PatternPhase::Awaiting => {}
            PatternPhase::Replaying { .. } => {
                return Err(GameError::InputNotApplicable(
                    "pads are ignored while the pattern is replaying".to_owned(),
                ));
            }
            _ => {
                return Err(GameError::InputNotApplicable(
                    "no round is awaiting input".to_owned(),
                ));
            }
        }

        if pad == self.sequence[self.cursor] {
            self.cursor += 1;
            if self.cursor == self.sequence.len() {
                if self.sequence.len() >= TARGET_LENGTH {
                    self.conclude(GameOutcome::Success, clock);
                } else {
                    self.phase = PatternPhase::Interlude {
                        until: pacing_deadline(clock, STEP_MS),
                    };
                    self.push_signal(clock, SignalKind::TickRequested { after_ms: STEP_MS });
                }
            }
        } else {
            // A single wrong press discards the whole sequence. Progress
            // is never partially retained.
            debug!(
                expected = ?self.sequence[self.cursor],
                pressed = ?pad,
                "pattern mismatch, sequence reset"
            );
            self.sequence.clear();
            self.cursor = 0;
            self.phase = PatternPhase::Idle;
        }
        Ok(())
    }
}

impl Default for CrystalCake {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModule for CrystalCake {
    fn game_id(&self) -> GameId {
        GameId::Pattern
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
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), GameError> {
        match input {
            PlayerInput::StartRound => self.start_round(clock, rng),
            PlayerInput::Tick => self.tick(clock, rng),
            PlayerInput::Press { pad } => self.press(*pad, clock),
            other => Err(GameError::InputNotApplicable(format!(
                "the crystal cake has no use for {other:?}"
            ))),
        }
    }

    fn project(&self, mount: &mut dyn Mount) {
        if matches!(self.phase, PatternPhase::Concluded) {
            return;
        }
        mount.append(Element::Heading("Crystal Cake".to_owned()));
        mount.append(Element::Text(
            "Watch and repeat the glowing pattern.".to_owned(),
        ));
        match &self.phase {
            PatternPhase::Replaying { .. } => {
                // The shown pattern: the sequence itself, lit in order.
                for step in &self.sequence {
                    mount.append(Element::Pad {
                        color: *step,
                        lit: true,
                    });
                }
                mount.append(Element::Status(format!(
                    "Sequence length: {}. Watch closely.",
                    self.sequence.len()
                )));
            }
            PatternPhase::Awaiting => {
                for color in PadColor::ALL {
                    mount.append(Element::Pad { color, lit: false });
                }
                mount.append(Element::Status(format!(
                    "Repeat it! Progress {}/{}",
                    self.cursor,
                    self.sequence.len()
                )));
            }
            PatternPhase::Interlude { .. } => {
                for color in PadColor::ALL {
                    mount.append(Element::Pad { color, lit: false });
                }
                mount.append(Element::Status("Correct. Next round!".to_owned()));
            }
            PatternPhase::Idle => {
                for color in PadColor::ALL {
                    mount.append(Element::Pad { color, lit: false });
                }
                mount.append(Element::Button {
                    id: "start-round".to_owned(),
                    label: "Start Round".to_owned(),
                });
            }
            PatternPhase::Concluded => {}
        }
    }

    fn pending_signals(&self) -> &[GameSignal] {
        &self.pending_signals
    }

    fn drain_signals(&mut self) -> Vec<GameSignal> {
        std::mem::take(&mut self.pending_signals)
    }
}
