//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Symbol a player writes into a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X.
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a cell: empty, or holding exactly one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// A single addressable board slot.
///
/// A cell starts empty and can be written exactly once. Any later write is
/// rejected and leaves the original mark in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    square: Square,
}

impl Cell {
    /// Creates an empty cell at the given position.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            square: Square::Empty,
        }
    }

    /// Position this cell occupies.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Human-readable name of this cell.
    pub fn label(&self) -> &'static str {
        self.position.label()
    }

    /// Current contents.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Mark held by this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        match self.square {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is unmarked.
    pub fn is_empty(&self) -> bool {
        self.square == Square::Empty
    }

    /// Writes a mark into the cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::AlreadyOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(position = %self.position))]
    pub fn write(&mut self, mark: Mark) -> Result<(), MoveError> {
        match self.square {
            Square::Occupied(existing) => Err(MoveError::AlreadyOccupied {
                position: self.position,
                existing,
                attempted: mark,
            }),
            Square::Empty => {
                self.square = Square::Occupied(mark);
                debug!(%mark, "Cell written");
                Ok(())
            }
        }
    }

    /// Printable glyph: the mark, or a blank if unmarked.
    pub fn glyph(&self) -> char {
        match self.square {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Rows of the printed grid, top to bottom, as on a number pad.
const GRID: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

/// Horizontal rule printed between grid rows.
const ROW_RULE: &str = "\n-----------\n";

/// 3x3 tic-tac-toe board addressed by numpad index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in index order (positions 1-9).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(Cell::new),
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.slot()]
    }

    /// Gets the contents of the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.cell(pos).square()
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Writes `mark` at the position with numpad index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index` is not 1-9, and
    /// [`MoveError::AlreadyOccupied`] if the cell is already marked.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: i64, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_index(index)
            .ok_or_else(|| MoveError::OutOfRange(index.to_string()))?;
        self.place(pos, mark)?;
        Ok(pos)
    }

    /// Writes `mark` at a known position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::AlreadyOccupied`] if the cell is already marked.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        self.cells[pos.slot()].write(mark)
    }

    /// Returns true iff at least one cell is unmarked.
    pub fn has_open_positions(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    /// Positions that can still be played, in index order.
    pub fn open_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    /// All 9 cells in index order (1-9).
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a 3x3 grid with 7-8-9 on top.
    pub fn render(&self) -> String {
        GRID.iter()
            .map(|row| {
                format!(
                    " {} | {} | {}",
                    self.cell(row[0]),
                    self.cell(row[1]),
                    self.cell(row[2])
                )
            })
            .collect::<Vec<_>>()
            .join(ROW_RULE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the given mark.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
