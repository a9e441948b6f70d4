//! Shared fixtures for shell integration tests.
//!
//! Not every test file uses every fixture.
#![allow(dead_code)]

use cakequest_core::clock::Clock;
use cakequest_core::game::GameId;
use cakequest_core::input::{Direction, PlayerInput};
use cakequest_core::rng::DeterministicRng;
use cakequest_shell::adventure::{Adventure, UiEvent};
use cakequest_test_support::{FixedClock, RecordingMount};
use chrono::{Duration, TimeZone, Utc};

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
}

pub fn clock_after_ms(ms: i64) -> FixedClock {
    FixedClock(fixed_clock().0 + Duration::milliseconds(ms))
}

/// Drives a fresh adventure from the title screen onto the games menu.
pub fn enter_the_realm(
    adventure: &mut Adventure,
    mount: &mut RecordingMount,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) {
    adventure.handle_event(&UiEvent::StartAdventure, mount, clock, rng);
    adventure.handle_event(
        &UiEvent::StoryChoice {
            choice_id: "enter".to_owned(),
        },
        mount,
        clock,
        rng,
    );
}

/// Opens the maze and walks the winning path: two ups, five rights.
pub fn win_the_maze(
    adventure: &mut Adventure,
    mount: &mut RecordingMount,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) {
    adventure.handle_event(&UiEvent::OpenGame { game: GameId::Grid }, mount, clock, rng);
    let path = [
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Right,
    ];
    for direction in path {
        adventure.handle_event(
            &UiEvent::Game(PlayerInput::Move { direction }),
            mount,
            clock,
            rng,
        );
    }
}
