//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The game records each
//! accepted move so a finished game can be inspected afterwards.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cannot update {position} from {existing} to {attempted}.")]
    AlreadyOccupied {
        /// Position that was targeted.
        position: Position,
        /// Mark already in the cell.
        existing: Mark,
        /// Mark that was rejected.
        attempted: Mark,
    },

    /// The requested number is not on the board. Holds the number as typed.
    #[display("Position {_0} is not on the board. Choose a number between 1 and 9.")]
    OutOfRange(String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
