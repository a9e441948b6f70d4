//! Cake Quest — composition layer.
//!
//! The launcher owns the lifecycle of the active game module
//! (open, input routing, signal handling, teardown, stale-tick
//! filtering); the adventure façade wires the narrative flow, the
//! progress tracker, the player profile, and the launcher into the
//! screen flow an embedding UI drives.

pub mod adventure;
pub mod launcher;
