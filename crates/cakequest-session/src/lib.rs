//! Cake Quest — Session & Progress context.
//!
//! Session-scoped shared state: the bounded cake-piece counter with its
//! idempotent award operation, and the player's display profile. Both
//! live for the whole session and are owned by the shell, never
//! ambient.

pub mod player;
pub mod progress;
