//! Immutable story content.
//!
//! The fixed nodes ship as constructors for now; the types serialize so
//! the content can later move to external data without touching the
//! flow. That loading is deliberately deferred.

use serde::{Deserialize, Serialize};

/// The choice id that hands control off to the games.
pub const ACCEPT_CHOICE_ID: &str = "enter";

/// One selectable choice on a story node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Stable choice identifier.
    pub id: String,
    /// Player-facing label.
    pub label: String,
}

/// One story node: text plus an ordered set of choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeNode {
    /// Stable node identifier.
    pub id: String,
    /// The story text.
    pub text: String,
    /// The choices offered, in display order.
    pub choices: Vec<Choice>,
}

/// The introductory node shown when the adventure starts.
#[must_use]
pub fn intro() -> NarrativeNode {
    NarrativeNode {
        id: "intro".to_owned(),
        text: "You awaken in a sunlit glade where candles drift like tiny moons. \
               A parchment flutters at your feet: \"To claim your birthday gift, \
               brave heart, collect the five Cake Pieces hidden across the realm.\""
            .to_owned(),
        choices: vec![
            Choice {
                id: ACCEPT_CHOICE_ID.to_owned(),
                label: "Accept the Quest".to_owned(),
            },
            Choice {
                id: "later".to_owned(),
                label: "Not yet. Peek around first".to_owned(),
            },
        ],
    }
}

/// The single fixed detour for players who wander before accepting.
#[must_use]
pub fn detour() -> NarrativeNode {
    NarrativeNode {
        id: "detour".to_owned(),
        text: "You wander a little and find a glittering path that leads to the \
               Riddle Gate. Seems like the realm nudges you onward."
            .to_owned(),
        choices: vec![Choice {
            id: ACCEPT_CHOICE_ID.to_owned(),
            label: "Proceed to the realm".to_owned(),
        }],
    }
}
