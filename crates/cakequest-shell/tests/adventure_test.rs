//! Adventure façade tests: screen flow, narrative gating, game
//! lifecycle through UI events, and quest completion.

mod common;

use cakequest_core::game::GameId;
use cakequest_core::input::{Direction, PlayerInput};
use cakequest_core::mount::Element;
use cakequest_shell::adventure::{Adventure, Screen, UiEvent};
use cakequest_test_support::{MockRng, RecordingMount};

use common::{clock_after_ms, enter_the_realm, fixed_clock, win_the_maze};

#[test]
fn test_title_to_story_to_games_flow() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    assert_eq!(adventure.screen(), Screen::Title);
    adventure.handle_event(&UiEvent::StartAdventure, &mut mount, &clock, &mut rng);
    assert_eq!(adventure.screen(), Screen::Story);
    adventure.handle_event(
        &UiEvent::StoryChoice {
            choice_id: "enter".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    assert_eq!(adventure.screen(), Screen::Games);
}

#[test]
fn test_detour_gates_entry_until_accepted() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    adventure.handle_event(&UiEvent::StartAdventure, &mut mount, &clock, &mut rng);
    adventure.handle_event(
        &UiEvent::StoryChoice {
            choice_id: "later".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    // Still in the story, now on the detour node.
    assert_eq!(adventure.screen(), Screen::Story);

    let mut screen_mount = RecordingMount::new();
    adventure.project_screen(&mut screen_mount);
    assert_eq!(screen_mount.button_ids(), vec!["enter"]);

    adventure.handle_event(
        &UiEvent::StoryChoice {
            choice_id: "enter".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    assert_eq!(adventure.screen(), Screen::Games);
}

#[test]
fn test_instructions_round_trip() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    adventure.handle_event(&UiEvent::ShowInstructions, &mut mount, &clock, &mut rng);
    assert_eq!(adventure.screen(), Screen::Instructions);
    adventure.handle_event(&UiEvent::BackToTitle, &mut mount, &clock, &mut rng);
    assert_eq!(adventure.screen(), Screen::Title);
}

#[test]
fn test_player_name_shows_in_the_games_chrome() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    adventure.handle_event(
        &UiEvent::NameEntered {
            name: "Luna".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    win_the_maze(&mut adventure, &mut mount, &clock, &mut rng);

    let mut screen_mount = RecordingMount::new();
    adventure.project_screen(&mut screen_mount);
    assert!(screen_mount.has_status_containing("Luna, Cake Pieces: 1/5"));
}

#[test]
fn test_winning_the_maze_collects_a_piece() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    win_the_maze(&mut adventure, &mut mount, &clock, &mut rng);

    assert_eq!(adventure.progress().collected(), 1);
    assert_eq!(adventure.active_game(), None);
    assert!(!adventure.finale_unlocked());
}

#[test]
fn test_game_events_outside_the_games_screen_are_ignored() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    let ticks = adventure.handle_event(
        &UiEvent::Game(PlayerInput::Move {
            direction: Direction::Up,
        }),
        &mut mount,
        &clock,
        &mut rng,
    );
    assert!(ticks.is_empty());

    adventure.handle_event(&UiEvent::OpenGame { game: GameId::Grid }, &mut mount, &clock, &mut rng);
    assert_eq!(adventure.active_game(), None);
}

#[test]
fn test_open_game_by_identifier_string() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    adventure.handle_event(
        &UiEvent::OpenGameNamed {
            id: "trivia".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    assert_eq!(adventure.active_game(), Some(GameId::Trivia));

    // An unrecognized identifier is a silent no-op.
    adventure.handle_event(
        &UiEvent::OpenGameNamed {
            id: "riddle".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    assert_eq!(adventure.active_game(), Some(GameId::Trivia));
}

#[test]
fn test_trivia_feedback_tick_round_trip() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    adventure.handle_event(
        &UiEvent::OpenGame {
            game: GameId::Trivia,
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    let ticks = adventure.handle_event(
        &UiEvent::Game(PlayerInput::Choose { option: 0 }),
        &mut mount,
        &clock,
        &mut rng,
    );
    assert_eq!(ticks.len(), 1);

    adventure.handle_event(
        &UiEvent::TickElapsed {
            module_instance: ticks[0].module_instance,
        },
        &mut mount,
        &clock_after_ms(600),
        &mut rng,
    );
    // The next question is mounted.
    assert_eq!(mount.button_ids(), vec!["option-0", "option-1", "option-2"]);
}

#[test]
fn test_stale_tick_does_not_disturb_the_next_game() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    adventure.handle_event(
        &UiEvent::OpenGame {
            game: GameId::Trivia,
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    let ticks = adventure.handle_event(
        &UiEvent::Game(PlayerInput::Choose { option: 0 }),
        &mut mount,
        &clock,
        &mut rng,
    );

    adventure.handle_event(&UiEvent::OpenGame { game: GameId::Grid }, &mut mount, &clock, &mut rng);
    let follow_ups = adventure.handle_event(
        &UiEvent::TickElapsed {
            module_instance: ticks[0].module_instance,
        },
        &mut mount,
        &clock_after_ms(600),
        &mut rng,
    );

    assert!(follow_ups.is_empty());
    assert_eq!(adventure.active_game(), Some(GameId::Grid));
    assert!(mount.elements().iter().any(|element| matches!(
        element,
        Element::Heading(text) if text == "Maze of Wishes"
    )));
}

#[test]
fn test_return_to_story_and_back_into_the_realm() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    adventure.handle_event(&UiEvent::ReturnToStory, &mut mount, &clock, &mut rng);
    assert_eq!(adventure.screen(), Screen::Story);

    adventure.handle_event(
        &UiEvent::StoryChoice {
            choice_id: "enter".to_owned(),
        },
        &mut mount,
        &clock,
        &mut rng,
    );
    assert_eq!(adventure.screen(), Screen::Games);
}

#[test]
fn test_five_pieces_unlock_the_finale() {
    let mut adventure = Adventure::new();
    let mut mount = RecordingMount::new();
    let mut rng = MockRng;
    let clock = fixed_clock();

    enter_the_realm(&mut adventure, &mut mount, &clock, &mut rng);
    for _ in 0..5 {
        win_the_maze(&mut adventure, &mut mount, &clock, &mut rng);
    }

    assert_eq!(adventure.progress().collected(), 5);
    assert!(adventure.finale_unlocked());

    let mut screen_mount = RecordingMount::new();
    adventure.project_screen(&mut screen_mount);
    assert!(screen_mount.has_status_containing("finale is unlocked"));
}
