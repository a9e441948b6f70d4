//! Mount point — the render surface port.
//!
//! The core never touches a concrete rendering technology. A mount
//! point is an opaque handle supporting exactly two operations: clear
//! all children and append a renderable element. Game modules project
//! their current state into it; input events arrive separately through
//! `PlayerInput`.

use crate::input::PadColor;

/// A renderable element appended to a mount point.
///
/// Deliberately small: just enough vocabulary for the five game views
/// and the screen chrome. How an element looks is the embedding
/// layer's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A view heading.
    Heading(String),
    /// A paragraph of body text.
    Text(String),
    /// A transient status line.
    Status(String),
    /// A clickable control.
    Button {
        /// Stable identifier reported back through inputs.
        id: String,
        /// Display label.
        label: String,
    },
    /// A draggable chip (mixing ingredients).
    Draggable {
        /// The drag payload carried on drop.
        id: String,
        /// Display label.
        label: String,
    },
    /// A drop target (the cauldron).
    DropZone {
        /// Stable identifier.
        id: String,
        /// Labels of the items dropped so far.
        contents: Vec<String>,
    },
    /// A pattern pad.
    Pad {
        /// The pad color.
        color: PadColor,
        /// Whether the pad is shown lit.
        lit: bool,
    },
    /// One cell of the maze grid.
    GridCell {
        /// Zero-based row.
        row: u32,
        /// Zero-based column.
        col: u32,
        /// Occupant glyph, if any.
        glyph: Option<char>,
    },
    /// One space of the race track.
    TrackSpace {
        /// Zero-based track index.
        index: u32,
        /// Glyphs of the tokens on this space.
        tokens: Vec<char>,
    },
}

/// The render surface a game module or screen projects into.
pub trait Mount {
    /// Remove every child from the mount point.
    fn clear(&mut self);

    /// Append one renderable element.
    fn append(&mut self, element: Element);
}
