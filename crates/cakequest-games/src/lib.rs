//! Cake Quest — the five mini-game modules.
//!
//! Each variant is an explicit state machine implementing the
//! [`cakequest_core::game::GameModule`] contract: constructed fresh on
//! open, driven to a terminal outcome by player inputs, communicating
//! outward only through emitted signals.

pub mod domain;
