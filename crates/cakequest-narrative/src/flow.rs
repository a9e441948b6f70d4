//! The narrative flow state machine.

use tracing::debug;

use crate::story::{self, ACCEPT_CHOICE_ID, NarrativeNode};

/// What a handled choice did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    /// The flow stays in the story; the current node may have changed.
    Stay,
    /// Control leaves the narrative and enters the game launcher.
    HandOff,
}

/// A linear/branching dialogue machine gating entry into the games.
///
/// The current node is replaced, never mutated in place. There are no
/// cycles beyond the one fixed detour, and one terminal state: handed
/// off.
#[derive(Debug)]
pub struct NarrativeFlow {
    current: NarrativeNode,
    handed_off: bool,
}

impl NarrativeFlow {
    /// Creates a flow positioned at the introductory node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: story::intro(),
            handed_off: false,
        }
    }

    /// The node currently shown.
    #[must_use]
    pub fn current(&self) -> &NarrativeNode {
        &self.current
    }

    /// Whether control has left the narrative.
    #[must_use]
    pub fn handed_off(&self) -> bool {
        self.handed_off
    }

    /// Handles one choice.
    ///
    /// The accept choice hands control off to the games, idempotently,
    /// so a player who stepped back into the story can re-enter. Any
    /// other id replaces the current node with the fixed detour; after
    /// the hand-off, other ids are no-ops.
    pub fn handle_choice(&mut self, choice_id: &str) -> FlowStep {
        if choice_id == ACCEPT_CHOICE_ID {
            self.handed_off = true;
            return FlowStep::HandOff;
        }
        if self.handed_off {
            debug!(choice_id, "choice after hand-off ignored");
            return FlowStep::Stay;
        }
        debug!(choice_id, node = %self.current.id, "taking the detour");
        self.current = story::detour();
        FlowStep::Stay
    }
}

impl Default for NarrativeFlow {
    fn default() -> Self {
        Self::new()
    }
}
