//! Numpad positions for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board, numbered like a number pad (1-9).
///
/// The bottom row is 1-2-3 and the top row is 7-8-9, so a player picks a
/// square by pressing the key in the same physical spot on the keypad.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Bottom-left (position 1)
    BottomLeft = 1,
    /// Bottom-center (position 2)
    BottomCenter = 2,
    /// Bottom-right (position 3)
    BottomRight = 3,
    /// Middle-left (position 4)
    MiddleLeft = 4,
    /// Center (position 5)
    Center = 5,
    /// Middle-right (position 6)
    MiddleRight = 6,
    /// Top-left (position 7)
    TopLeft = 7,
    /// Top-center (position 8)
    TopCenter = 8,
    /// Top-right (position 9)
    TopRight = 9,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
    ];

    /// Human-readable name of this position.
    pub fn label(self) -> &'static str {
        match self {
            Position::BottomLeft => "bottom left",
            Position::BottomCenter => "bottom center",
            Position::BottomRight => "bottom right",
            Position::MiddleLeft => "middle left",
            Position::Center => "middle center",
            Position::MiddleRight => "middle right",
            Position::TopLeft => "top left",
            Position::TopCenter => "top center",
            Position::TopRight => "top right",
        }
    }

    /// Numpad index of this position (1-9).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Slot of this position in a zero-based, index-ordered array.
    pub(crate) fn slot(self) -> usize {
        usize::from(self.index()) - 1
    }

    /// Creates a position from its numpad index.
    ///
    /// Returns `None` for anything outside 1-9.
    #[instrument]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Position::BottomLeft),
            2 => Some(Position::BottomCenter),
            3 => Some(Position::BottomRight),
            4 => Some(Position::MiddleLeft),
            5 => Some(Position::Center),
            6 => Some(Position::MiddleRight),
            7 => Some(Position::TopLeft),
            8 => Some(Position::TopCenter),
            9 => Some(Position::TopRight),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
