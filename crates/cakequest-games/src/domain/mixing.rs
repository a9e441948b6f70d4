//! Potion Mixer — drag-and-drop set matching.

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

/// The potion is judged once this many distinct ingredients land.
pub const RECIPE_SIZE: usize = 3;

/// A pantry ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ingredient {
    /// Moonflower (`moon`).
    Moonflower,
    /// Starlit Honey (`honey`).
    StarlitHoney,
    /// Ember Salt (`ember`).
    EmberSalt,
    /// Mintleaf (`mint`).
    Mintleaf,
    /// Rose Dew (`rose`).
    RoseDew,
}

impl Ingredient {
    /// The full pantry, in display order.
    pub const ALL: [Ingredient; 5] = [
        Ingredient::Moonflower,
        Ingredient::StarlitHoney,
        Ingredient::EmberSalt,
        Ingredient::Mintleaf,
        Ingredient::RoseDew,
    ];

    /// Stable identifier string carried as the drag payload.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Ingredient::Moonflower => "moon",
            Ingredient::StarlitHoney => "honey",
            Ingredient::EmberSalt => "ember",
            Ingredient::Mintleaf => "mint",
            Ingredient::RoseDew => "rose",
        }
    }

    /// Player-facing name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Ingredient::Moonflower => "Moonflower",
            Ingredient::StarlitHoney => "Starlit Honey",
            Ingredient::EmberSalt => "Ember Salt",
            Ingredient::Mintleaf => "Mintleaf",
            Ingredient::RoseDew => "Rose Dew",
        }
    }

    /// Parses a drag payload.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownIngredient` if the payload names no
    /// pantry ingredient.
    pub fn parse(value: &str) -> Result<Self, GameError> {
        Self::ALL
            .into_iter()
            .find(|ingredient| ingredient.id() == value)
            .ok_or_else(|| GameError::UnknownIngredient(value.to_owned()))
    }
}

/// The birthday potion recipe, order irrelevant.
pub const TARGET_RECIPE: [Ingredient; RECIPE_SIZE] = [
    Ingredient::Moonflower,
    Ingredient::StarlitHoney,
    Ingredient::RoseDew,
];

#[derive(Debug, Clone, Copy)]
enum MixingPhase {
    /// Accepting drops until the cauldron holds three ingredients.
    Mixing,
    /// The potion has been judged; awaiting the finish control.
    Judged { success: bool },
    /// Terminal.
    Concluded,
}

/// The Potion Mixer game module.
#[derive(Debug)]
pub struct PotionMixer {
    instance_id: Uuid,
    added: Vec<Ingredient>,
    phase: MixingPhase,
    outcome: GameOutcome,
    pending_signals: Vec<GameSignal>,
}

impl PotionMixer {
    /// Creates a fresh mixer with an empty cauldron.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            added: Vec::new(),
            phase: MixingPhase::Mixing,
            outcome: GameOutcome::Pending,
            pending_signals: Vec::new(),
        }
    }

    /// Ingredients in the cauldron, in drop order.
    #[must_use]
    pub fn cauldron(&self) -> &[Ingredient] {
        &self.added
    }

    fn push_signal(&mut self, clock: &dyn Clock, kind: SignalKind) {
        self.pending_signals
            .push(GameSignal::new(GameId::Mixing, self.instance_id, clock, kind));
    }

    /// First terminal transition wins; a second attempt is a no-op.
    fn conclude(&mut self, outcome: GameOutcome, clock: &dyn Clock) {
        if self.outcome.is_terminal() {
            debug!(game = GameId::Mixing.as_str(), "duplicate conclusion ignored");
            return;
        }
        self.outcome = outcome;
        if outcome == GameOutcome::Success {
            self.push_signal(clock, SignalKind::PieceEarned);
        }
        self.push_signal(clock, SignalKind::Concluded { outcome });
        self.phase = MixingPhase::Concluded;
    }

    fn drop_item(&mut self, item: &str) -> Result<(), GameError> {
        if !matches!(self.phase, MixingPhase::Mixing) {
            return Err(GameError::InputNotApplicable(
                "the cauldron is no longer accepting ingredients".to_owned(),
            ));
        }
        let ingredient = Ingredient::parse(item)?;

        // Only the first occurrence of a duplicate drop is recorded.
        if self.added.contains(&ingredient) {
            debug!(ingredient = ingredient.id(), "duplicate drop ignored");
            return Ok(());
        }
        self.added.push(ingredient);

        if self.added.len() == RECIPE_SIZE {
            let mut mixed = self.added.clone();
            mixed.sort();
            let mut target = TARGET_RECIPE;
            target.sort();
            let success = mixed == target;
            self.phase = MixingPhase::Judged { success };
        }
        Ok(())
    }

    fn finish(&mut self, clock: &dyn Clock) -> Result<(), GameError> {
        let MixingPhase::Judged { success } = self.phase else {
            return Err(GameError::InputNotApplicable(
                "the potion has not been judged yet".to_owned(),
            ));
        };
        let outcome = if success {
            GameOutcome::Success
        } else {
            GameOutcome::Failure
        };
        self.conclude(outcome, clock);
        Ok(())
    }
}

impl Default for PotionMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModule for PotionMixer {
    fn game_id(&self) -> GameId {
        GameId::Mixing
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
            PlayerInput::Drop { item } => self.drop_item(item),
            PlayerInput::Continue => self.finish(clock),
            other => Err(GameError::InputNotApplicable(format!(
                "the potion mixer has no use for {other:?}"
            ))),
        }
    }

    fn project(&self, mount: &mut dyn Mount) {
        if matches!(self.phase, MixingPhase::Concluded) {
            return;
        }
        mount.append(Element::Heading("Potion Mixer".to_owned()));
        mount.append(Element::Text(
            "Drag ingredients into the cauldron. Create the birthday potion!".to_owned(),
        ));
        for ingredient in Ingredient::ALL {
            mount.append(Element::Draggable {
                id: ingredient.id().to_owned(),
                label: ingredient.name().to_owned(),
            });
        }
        mount.append(Element::DropZone {
            id: "cauldron".to_owned(),
            contents: self
                .added
                .iter()
                .map(|ingredient| ingredient.name().to_owned())
                .collect(),
        });
        if let MixingPhase::Judged { success } = self.phase {
            let message = if success {
                "The potion blooms with sparkles. Success!"
            } else {
                "The mixture fizzes but fails to form the birthday potion."
            };
            mount.append(Element::Status(message.to_owned()));
            mount.append(Element::Button {
                id: "finish".to_owned(),
                label: "Finish".to_owned(),
            });
        }
    }

    fn pending_signals(&self) -> &[GameSignal] {
        &self.pending_signals
    }

    fn drain_signals(&mut self) -> Vec<GameSignal> {
        std::mem::take(&mut self.pending_signals)
    }
}
