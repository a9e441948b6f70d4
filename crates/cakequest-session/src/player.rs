//! The player's display profile.

use serde::{Deserialize, Serialize};

/// Display name used when the player gives none.
pub const DEFAULT_NAME: &str = "Friend";

/// Cosmetic player identity. Never consulted by game logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
}

impl PlayerProfile {
    /// Creates a profile with the default display name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
        }
    }

    /// The current display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name; blank input falls back to the default.
    pub fn set_name(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_NAME.to_owned()
        } else {
            trimmed.to_owned()
        };
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new()
    }
}
