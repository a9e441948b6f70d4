//! Signals emitted by game modules.
//!
//! Modules never reach out to shared state directly. They push signals
//! into a pending buffer; the launcher drains the buffer and applies
//! the effects (award a cake piece, tear the module down, schedule a
//! pacing timer). This keeps every module testable in isolation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::game::GameId;
use crate::outcome::GameOutcome;

/// Metadata attached to every game signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalMetadata {
    /// Unique signal identifier.
    pub signal_id: Uuid,
    /// The game variant that emitted the signal.
    pub game: GameId,
    /// The emitting module instance. Pacing timers are scheduled
    /// against this id, which is what makes a superseded module's
    /// timers inert.
    pub module_instance: Uuid,
    /// Timestamp of signal creation.
    pub occurred_at: DateTime<Utc>,
}

/// Signal payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SignalKind {
    /// The module earned a cake piece. Emitted at most once per module
    /// instance, always before the concluding signal.
    PieceEarned,
    /// The module reached its terminal outcome. Emitted exactly once.
    Concluded {
        /// The terminal outcome.
        outcome: GameOutcome,
    },
    /// The module asks the embedding layer to deliver a `Tick` after a
    /// cosmetic delay.
    TickRequested {
        /// Delay before the tick, in milliseconds.
        after_ms: u64,
    },
}

/// Signal envelope emitted by a game module.
#[derive(Debug, Clone)]
pub struct GameSignal {
    /// Signal metadata.
    pub metadata: SignalMetadata,
    /// Signal-specific payload.
    pub kind: SignalKind,
}

impl GameSignal {
    /// Creates a signal stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(game: GameId, module_instance: Uuid, clock: &dyn Clock, kind: SignalKind) -> Self {
        Self {
            metadata: SignalMetadata {
                signal_id: Uuid::new_v4(),
                game,
                module_instance,
                occurred_at: clock.now(),
            },
            kind,
        }
    }

    /// Returns the signal type name (used for logging and routing).
    #[must_use]
    pub fn signal_type(&self) -> &'static str {
        match &self.kind {
            SignalKind::PieceEarned => "game.piece_earned",
            SignalKind::Concluded { .. } => "game.concluded",
            SignalKind::TickRequested { .. } => "game.tick_requested",
        }
    }

    /// Serializes the signal payload to JSON.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("SignalKind serialization is infallible")
    }
}
