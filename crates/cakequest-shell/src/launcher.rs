//! The game launcher.
//!
//! Exclusively owns the active game module: it constructs the module
//! on `open`, routes inputs and ticks to it, applies its signals
//! (award, teardown, timer scheduling), and destroys it
//! unconditionally when a new game opens.

use tracing::{debug, info};
use uuid::Uuid;

use cakequest_core::clock::Clock;
use cakequest_core::game::{GameId, GameModule};
use cakequest_core::input::PlayerInput;
use cakequest_core::mount::Mount;
use cakequest_core::rng::DeterministicRng;
use cakequest_core::signal::SignalKind;
use cakequest_games::domain::grid::WishMaze;
use cakequest_games::domain::mixing::PotionMixer;
use cakequest_games::domain::pattern::CrystalCake;
use cakequest_games::domain::track::BirthdayBoard;
use cakequest_games::domain::trivia::TriviaGate;
use cakequest_session::progress::ProgressTracker;

/// A pacing timer the embedding layer should schedule.
///
/// Deliver it back through [`Launcher::deliver_tick`] with the same
/// instance id; ticks from superseded modules are dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    /// The module instance the tick belongs to.
    pub module_instance: Uuid,
    /// Delay before delivery, in milliseconds.
    pub after_ms: u64,
}

/// Maps game identifiers to module instances and owns the active one.
#[derive(Debug, Default)]
pub struct Launcher {
    active: Option<Box<dyn GameModule>>,
}

impl Launcher {
    /// Creates a launcher with no active game.
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    /// The active game variant, if any.
    #[must_use]
    pub fn active_game(&self) -> Option<GameId> {
        self.active.as_ref().map(|module| module.game_id())
    }

    /// The active module instance id, if any.
    #[must_use]
    pub fn active_instance(&self) -> Option<Uuid> {
        self.active.as_ref().map(|module| module.instance_id())
    }

    /// Opens a game: clears the mount unconditionally (abandon-on-switch,
    /// not graceful cancellation), constructs the matching module fresh,
    /// and projects it.
    pub fn open(&mut self, game: GameId, mount: &mut dyn Mount) {
        if let Some(previous) = &self.active {
            debug!(
                game = previous.game_id().as_str(),
                outcome = ?previous.outcome(),
                "abandoning active module"
            );
        }
        mount.clear();

        let module: Box<dyn GameModule> = match game {
            GameId::Trivia => Box::new(TriviaGate::new()),
            GameId::Mixing => Box::new(PotionMixer::new()),
            GameId::Pattern => Box::new(CrystalCake::new()),
            GameId::Grid => Box::new(WishMaze::new()),
            GameId::Track => Box::new(BirthdayBoard::new()),
        };
        info!(
            game = game.as_str(),
            instance = %module.instance_id(),
            "game opened"
        );
        module.project(mount);
        self.active = Some(module);
    }

    /// Routes one player input to the active module and applies the
    /// resulting signals.
    ///
    /// With no active module, or when the module rejects the input,
    /// this degrades to a debug-logged no-op. Returned ticks are the
    /// caller's to schedule.
    pub fn dispatch(
        &mut self,
        input: &PlayerInput,
        mount: &mut dyn Mount,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
        progress: &mut ProgressTracker,
    ) -> Vec<ScheduledTick> {
        let Some(module) = self.active.as_mut() else {
            debug!(?input, "input with no active game ignored");
            return Vec::new();
        };

        if let Err(error) = module.handle_input(input, clock, rng) {
            debug!(game = module.game_id().as_str(), %error, "input ignored");
            return Vec::new();
        }

        let signals = module.drain_signals();
        let mut ticks = Vec::new();
        let mut concluded = false;
        for signal in &signals {
            match signal.kind {
                SignalKind::PieceEarned => {
                    progress.award();
                }
                SignalKind::Concluded { outcome } => {
                    info!(
                        game = signal.metadata.game.as_str(),
                        ?outcome,
                        "game concluded"
                    );
                    concluded = true;
                }
                SignalKind::TickRequested { after_ms } => ticks.push(ScheduledTick {
                    module_instance: signal.metadata.module_instance,
                    after_ms,
                }),
            }
        }

        if concluded {
            // Self-teardown: the module's content leaves the mount and
            // the module itself is destroyed.
            self.active = None;
            mount.clear();
        } else {
            mount.clear();
            if let Some(module) = &self.active {
                module.project(mount);
            }
        }
        ticks
    }

    /// Delivers a previously scheduled tick.
    ///
    /// A tick whose instance id does not match the active module is a
    /// superseded timer firing after teardown; it is dropped with a
    /// debug log rather than cancelled, which makes it provably unable
    /// to touch a torn-down view.
    pub fn deliver_tick(
        &mut self,
        module_instance: Uuid,
        mount: &mut dyn Mount,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
        progress: &mut ProgressTracker,
    ) -> Vec<ScheduledTick> {
        let is_current = self
            .active
            .as_ref()
            .is_some_and(|module| module.instance_id() == module_instance);
        if !is_current {
            debug!(instance = %module_instance, "stale tick dropped");
            return Vec::new();
        }
        self.dispatch(&PlayerInput::Tick, mount, clock, rng, progress)
    }
}
