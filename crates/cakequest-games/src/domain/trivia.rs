//! Riddle Gate — sequential trivia with a fixed pass threshold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cakequest_core::clock::Clock;
use cakequest_core::error::GameError;
use cakequest_core::game::{GameId, GameModule};
use cakequest_core::input::PlayerInput;
use cakequest_core::mount::{Element, Mount};
use cakequest_core::outcome::GameOutcome;
use cakequest_core::rng::DeterministicRng;
use cakequest_core::signal::{GameSignal, SignalKind};

use super::pacing_deadline;

/// Correct answers required to pass (out of three questions).
pub const PASS_THRESHOLD: usize = 2;

/// Feedback delay after each answer, in milliseconds.
pub const FEEDBACK_MS: u64 = 600;

/// One trivia question with exactly one correct option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaQuestion {
    /// The question text.
    pub prompt: String,
    /// The answer options, in display order.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct: usize,
}

/// The fixed riddle set guarding the gate.
#[must_use]
pub fn standard_riddles() -> Vec<TriviaQuestion> {
    vec![
        TriviaQuestion {
            prompt: "I speak without a mouth and hear without ears. I have nobody, \
                     but I come alive with wind. What am I?"
                .to_owned(),
            options: vec!["Echo".to_owned(), "Shadow".to_owned(), "Fire".to_owned()],
            correct: 0,
        },
        TriviaQuestion {
            prompt: "The more of this there is, the less you see. What is it?".to_owned(),
            options: vec![
                "Fog".to_owned(),
                "Darkness".to_owned(),
                "Smoke".to_owned(),
            ],
            correct: 1,
        },
        TriviaQuestion {
            prompt: "I'm taken from a mine and shut up in a wooden case, from which \
                     I am never released, and yet I am used by almost every person. \
                     What am I?"
                .to_owned(),
            options: vec![
                "Coal".to_owned(),
                "Pencil lead".to_owned(),
                "Gold".to_owned(),
            ],
            correct: 1,
        },
    ]
}

/// Riddle Gate phase state machine.
#[derive(Debug, Clone)]
enum TriviaPhase {
    /// The current question is shown and accepting an answer.
    Asking,
    /// Answer feedback is shown; inputs wait for the pacing deadline.
    Feedback {
        until: DateTime<Utc>,
        was_correct: bool,
    },
    /// All questions answered; the summary awaits `Continue`.
    Summary,
    /// Terminal.
    Concluded,
}

/// The Riddle Gate game module.
#[derive(Debug)]
pub struct TriviaGate {
    instance_id: Uuid,
    questions: Vec<TriviaQuestion>,
    index: usize,
    correct: usize,
    phase: TriviaPhase,
    outcome: GameOutcome,
    pending_signals: Vec<GameSignal>,
}

impl TriviaGate {
    /// Creates a fresh gate over the standard riddle set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            questions: standard_riddles(),
            index: 0,
            correct: 0,
            phase: TriviaPhase::Asking,
            outcome: GameOutcome::Pending,
            pending_signals: Vec::new(),
        }
    }

    /// Number of correctly answered questions so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    fn push_signal(&mut self, clock: &dyn Clock, kind: SignalKind) {
        self.pending_signals
            .push(GameSignal::new(GameId::Trivia, self.instance_id, clock, kind));
    }

    /// First terminal transition wins; a second attempt is a no-op.
    fn conclude(&mut self, outcome: GameOutcome, clock: &dyn Clock) {
        if self.outcome.is_terminal() {
            debug!(game = GameId::Trivia.as_str(), "duplicate conclusion ignored");
            return;
        }
        self.outcome = outcome;
        if outcome == GameOutcome::Success {
            self.push_signal(clock, SignalKind::PieceEarned);
        }
        self.push_signal(clock, SignalKind::Concluded { outcome });
        self.phase = TriviaPhase::Concluded;
    }

    fn answer(&mut self, option: usize, clock: &dyn Clock) -> Result<(), GameError> {
        if !matches!(self.phase, TriviaPhase::Asking) {
            return Err(GameError::InputNotApplicable(
                "answers are only accepted while a question is shown".to_owned(),
            ));
        }
        let question = &self.questions[self.index];
        if option >= question.options.len() {
            return Err(GameError::InputNotApplicable(format!(
                "option {option} is out of range"
            )));
        }

        let was_correct = option == question.correct;
        if was_correct {
            self.correct += 1;
        }
        self.phase = TriviaPhase::Feedback {
            until: pacing_deadline(clock, FEEDBACK_MS),
            was_correct,
        };
        self.push_signal(
            clock,
            SignalKind::TickRequested {
                after_ms: FEEDBACK_MS,
            },
        );
        Ok(())
    }

    fn advance(&mut self, clock: &dyn Clock) -> Result<(), GameError> {
        let TriviaPhase::Feedback { until, .. } = &self.phase else {
            return Err(GameError::InputNotApplicable(
                "no feedback is pending".to_owned(),
            ));
        };
        if clock.now() < *until {
            return Err(GameError::InputNotApplicable(
                "tick arrived before the feedback deadline".to_owned(),
            ));
        }

        self.index += 1;
        self.phase = if self.index < self.questions.len() {
            TriviaPhase::Asking
        } else {
            TriviaPhase::Summary
        };
        Ok(())
    }

    fn finish(&mut self, clock: &dyn Clock) -> Result<(), GameError> {
        if !matches!(self.phase, TriviaPhase::Summary) {
            return Err(GameError::InputNotApplicable(
                "the gate is not waiting on the summary".to_owned(),
            ));
        }
        let outcome = if self.correct >= PASS_THRESHOLD {
            GameOutcome::Success
        } else {
            GameOutcome::Failure
        };
        self.conclude(outcome, clock);
        Ok(())
    }
}

impl Default for TriviaGate {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModule for TriviaGate {
    fn game_id(&self) -> GameId {
        GameId::Trivia
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
            PlayerInput::Choose { option } => self.answer(*option, clock),
            PlayerInput::Tick => self.advance(clock),
            PlayerInput::Continue => self.finish(clock),
            other => Err(GameError::InputNotApplicable(format!(
                "the riddle gate has no use for {other:?}"
            ))),
        }
    }

    fn project(&self, mount: &mut dyn Mount) {
        match &self.phase {
            TriviaPhase::Asking => {
                mount.append(Element::Heading("Riddle Gate".to_owned()));
                let question = &self.questions[self.index];
                mount.append(Element::Text(question.prompt.clone()));
                for (i, option) in question.options.iter().enumerate() {
                    mount.append(Element::Button {
                        id: format!("option-{i}"),
                        label: option.clone(),
                    });
                }
            }
            TriviaPhase::Feedback { was_correct, .. } => {
                mount.append(Element::Heading("Riddle Gate".to_owned()));
                mount.append(Element::Text(self.questions[self.index].prompt.clone()));
                let feedback = if *was_correct {
                    "The gate hums approvingly."
                } else {
                    "The gate stays silent."
                };
                mount.append(Element::Status(feedback.to_owned()));
            }
            TriviaPhase::Summary => {
                mount.append(Element::Heading("Riddle Gate".to_owned()));
                let message = if self.correct >= PASS_THRESHOLD {
                    "You lit a Candle of Wisdom!"
                } else {
                    "The Gate remains stubborn. Try again later."
                };
                mount.append(Element::Text(message.to_owned()));
                mount.append(Element::Status(format!(
                    "Correct: {}/{}",
                    self.correct,
                    self.questions.len()
                )));
                mount.append(Element::Button {
                    id: "continue".to_owned(),
                    label: "Continue".to_owned(),
                });
            }
            TriviaPhase::Concluded => {}
        }
    }

    fn pending_signals(&self) -> &[GameSignal] {
        &self.pending_signals
    }

    fn drain_signals(&mut self) -> Vec<GameSignal> {
        std::mem::take(&mut self.pending_signals)
    }
}
