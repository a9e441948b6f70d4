//! Cake Quest Core — shared domain abstractions.
//!
//! This crate defines the contracts every mini-game variant and the
//! shell depend on: the game module lifecycle, the input and signal
//! vocabularies, and the ports to the outside world (mount point,
//! clock, randomness). It contains no game logic.

pub mod clock;
pub mod error;
pub mod game;
pub mod input;
pub mod mount;
pub mod outcome;
pub mod rng;
pub mod signal;
