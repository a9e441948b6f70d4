//! Player input vocabulary.
//!
//! All five game variants consume the same input enum through a single
//! `handle_input` entry point; a module rejects the kinds it has no use
//! for in its current phase. This replaces per-widget callbacks with an
//! explicit, testable event stream.

use serde::{Deserialize, Serialize};

/// A movement direction on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// Row delta of one step in this direction.
    #[must_use]
    pub fn row_delta(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Column delta of one step in this direction.
    #[must_use]
    pub fn col_delta(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }
}

/// One of the four pattern pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadColor {
    /// The red pad.
    Red,
    /// The green pad.
    Green,
    /// The blue pad.
    Blue,
    /// The yellow pad.
    Yellow,
}

impl PadColor {
    /// The fixed pad palette, in display order.
    pub const ALL: [PadColor; 4] = [
        PadColor::Red,
        PadColor::Green,
        PadColor::Blue,
        PadColor::Yellow,
    ];

    /// Maps a uniform draw in `[0, 3]` to a pad.
    ///
    /// Indices past the palette wrap, so any `u32` is a valid draw.
    #[must_use]
    pub fn from_draw(draw: u32) -> Self {
        Self::ALL[draw as usize % Self::ALL.len()]
    }
}

/// A discrete player interaction delivered to the active game module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerInput {
    /// An answer option was chosen (trivia).
    Choose {
        /// Zero-based index of the chosen option.
        option: usize,
    },
    /// An item was dropped onto the drop zone (mixing).
    Drop {
        /// The drag payload: an ingredient identifier.
        item: String,
    },
    /// A pattern pad was pressed (pattern memory).
    Press {
        /// The pressed pad.
        pad: PadColor,
    },
    /// A movement key was pressed (grid navigation).
    Move {
        /// The movement direction.
        direction: Direction,
    },
    /// The die was rolled (track race).
    Roll,
    /// A new round was requested (pattern memory).
    StartRound,
    /// The continue/finish control was activated.
    Continue,
    /// A previously requested pacing timer elapsed.
    Tick,
}
