//! The adventure façade.
//!
//! One struct owns the whole session: screen flow, narrative flow,
//! player profile, progress tracker, and launcher. An embedding UI
//! feeds it `UiEvent`s and projects the current screen; clock and RNG
//! are passed by reference per call rather than held as ambient state.

use tracing::debug;
use uuid::Uuid;

use cakequest_core::clock::Clock;
use cakequest_core::game::GameId;
use cakequest_core::input::PlayerInput;
use cakequest_core::mount::{Element, Mount};
use cakequest_core::rng::DeterministicRng;
use cakequest_narrative::flow::{FlowStep, NarrativeFlow};
use cakequest_session::player::PlayerProfile;
use cakequest_session::progress::ProgressTracker;

use crate::launcher::{Launcher, ScheduledTick};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen with name entry.
    Title,
    /// The how-to-play screen.
    Instructions,
    /// The story screen (narrative flow).
    Story,
    /// The game menu and play area.
    Games,
}

/// One interaction delivered by the embedding UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The player edited the name field.
    NameEntered {
        /// The raw field contents.
        name: String,
    },
    /// The how-to-play screen was requested.
    ShowInstructions,
    /// Back from the instructions to the title.
    BackToTitle,
    /// The adventure was started from the title screen.
    StartAdventure,
    /// A story choice was selected.
    StoryChoice {
        /// The selected choice id.
        choice_id: String,
    },
    /// Back from the games to the story screen.
    ReturnToStory,
    /// A game was picked from the menu.
    OpenGame {
        /// The picked game.
        game: GameId,
    },
    /// A game was picked by its identifier string (menu controls carry
    /// the id as data).
    OpenGameNamed {
        /// The raw identifier.
        id: String,
    },
    /// An input for the active game.
    Game(PlayerInput),
    /// A scheduled pacing timer elapsed.
    TickElapsed {
        /// The module instance the timer was scheduled for.
        module_instance: Uuid,
    },
}

/// The whole session, owned in one place.
#[derive(Debug)]
pub struct Adventure {
    screen: Screen,
    profile: PlayerProfile,
    flow: NarrativeFlow,
    progress: ProgressTracker,
    launcher: Launcher,
}

impl Adventure {
    /// Creates a fresh session on the title screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Title,
            profile: PlayerProfile::new(),
            flow: NarrativeFlow::new(),
            progress: ProgressTracker::default(),
            launcher: Launcher::new(),
        }
    }

    /// The screen currently shown.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The player profile.
    #[must_use]
    pub fn player(&self) -> &PlayerProfile {
        &self.profile
    }

    /// The progress tracker.
    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// The active game variant, if any.
    #[must_use]
    pub fn active_game(&self) -> Option<GameId> {
        self.launcher.active_game()
    }

    /// Whether every cake piece has been gathered.
    #[must_use]
    pub fn finale_unlocked(&self) -> bool {
        self.progress.is_complete()
    }

    /// Handles one UI event.
    ///
    /// `game_mount` is the play area the active module renders into.
    /// Returned ticks are the embedding layer's to schedule and deliver
    /// back as [`UiEvent::TickElapsed`].
    pub fn handle_event(
        &mut self,
        event: &UiEvent,
        game_mount: &mut dyn Mount,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Vec<ScheduledTick> {
        match event {
            UiEvent::NameEntered { name } => {
                self.profile.set_name(name);
            }
            UiEvent::ShowInstructions => {
                if self.screen == Screen::Title {
                    self.screen = Screen::Instructions;
                } else {
                    debug!(screen = ?self.screen, "instructions only open from the title");
                }
            }
            UiEvent::BackToTitle => {
                if self.screen == Screen::Instructions {
                    self.screen = Screen::Title;
                } else {
                    debug!(screen = ?self.screen, "not on the instructions screen");
                }
            }
            UiEvent::StartAdventure => {
                if self.screen == Screen::Title {
                    self.screen = Screen::Story;
                } else {
                    debug!(screen = ?self.screen, "the adventure starts from the title");
                }
            }
            UiEvent::StoryChoice { choice_id } => {
                if self.screen == Screen::Story {
                    if self.flow.handle_choice(choice_id) == FlowStep::HandOff {
                        self.screen = Screen::Games;
                    }
                } else {
                    debug!(screen = ?self.screen, "story choice outside the story ignored");
                }
            }
            UiEvent::ReturnToStory => {
                if self.screen == Screen::Games {
                    self.screen = Screen::Story;
                } else {
                    debug!(screen = ?self.screen, "not on the games screen");
                }
            }
            UiEvent::OpenGame { game } => {
                if self.screen == Screen::Games {
                    self.launcher.open(*game, game_mount);
                } else {
                    debug!(screen = ?self.screen, game = game.as_str(), "games open from the menu");
                }
            }
            UiEvent::OpenGameNamed { id } => {
                if self.screen == Screen::Games {
                    match GameId::parse(id) {
                        Ok(game) => self.launcher.open(game, game_mount),
                        // An unrecognized identifier degrades to a
                        // logged no-op.
                        Err(error) => debug!(%error, "game identifier ignored"),
                    }
                } else {
                    debug!(screen = ?self.screen, "games open from the menu");
                }
            }
            UiEvent::Game(input) => {
                if self.screen == Screen::Games {
                    return self
                        .launcher
                        .dispatch(input, game_mount, clock, rng, &mut self.progress);
                }
                debug!(screen = ?self.screen, "game input outside the games screen ignored");
            }
            UiEvent::TickElapsed { module_instance } => {
                // No screen guard: the instance filter alone decides.
                return self.launcher.deliver_tick(
                    *module_instance,
                    game_mount,
                    clock,
                    rng,
                    &mut self.progress,
                );
            }
        }
        Vec::new()
    }

    /// Projects the current screen's chrome into `mount`.
    ///
    /// The active game projects separately into the game mount; this
    /// renders everything around it.
    pub fn project_screen(&self, mount: &mut dyn Mount) {
        mount.clear();
        match self.screen {
            Screen::Title => {
                mount.append(Element::Heading("Cake Quest".to_owned()));
                mount.append(Element::Text(
                    "A birthday adventure of five trials and five cake pieces.".to_owned(),
                ));
                mount.append(Element::Status(format!("Player: {}", self.profile.name())));
                mount.append(Element::Button {
                    id: "start".to_owned(),
                    label: "Begin the Adventure".to_owned(),
                });
                mount.append(Element::Button {
                    id: "instructions".to_owned(),
                    label: "How to Play".to_owned(),
                });
            }
            Screen::Instructions => {
                mount.append(Element::Heading("How to Play".to_owned()));
                mount.append(Element::Text(
                    "Each trial hides one Cake Piece. Win a trial to claim its piece; \
                     gather all five to unlock the finale."
                        .to_owned(),
                ));
                mount.append(Element::Button {
                    id: "back".to_owned(),
                    label: "Back".to_owned(),
                });
            }
            Screen::Story => {
                let node = self.flow.current();
                mount.append(Element::Heading("The Story".to_owned()));
                mount.append(Element::Text(node.text.clone()));
                for choice in &node.choices {
                    mount.append(Element::Button {
                        id: choice.id.clone(),
                        label: choice.label.clone(),
                    });
                }
            }
            Screen::Games => {
                mount.append(Element::Heading("The Realm".to_owned()));
                mount.append(Element::Status(format!(
                    "{}, Cake Pieces: {}/{}",
                    self.profile.name(),
                    self.progress.collected(),
                    self.progress.needed()
                )));
                for game in GameId::ALL {
                    mount.append(Element::Button {
                        id: game.as_str().to_owned(),
                        label: game.title().to_owned(),
                    });
                }
                mount.append(Element::Button {
                    id: "to-story".to_owned(),
                    label: "Back to Story".to_owned(),
                });
                if self.finale_unlocked() {
                    mount.append(Element::Status(
                        "All Cake Pieces gathered! The Birthday Board finale is unlocked!"
                            .to_owned(),
                    ));
                }
            }
        }
    }
}

impl Default for Adventure {
    fn default() -> Self {
        Self::new()
    }
}
