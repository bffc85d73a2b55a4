//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 lines that win when uniformly marked, by numpad position.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    // Columns
    [
        Position::BottomLeft,
        Position::MiddleLeft,
        Position::TopLeft,
    ],
    [
        Position::BottomCenter,
        Position::Center,
        Position::TopCenter,
    ],
    [
        Position::BottomRight,
        Position::MiddleRight,
        Position::TopRight,
    ],
    // Diagonals
    [Position::BottomLeft, Position::Center, Position::TopRight],
    [Position::BottomRight, Position::Center, Position::TopLeft],
];

/// Finds the first completed line in table order.
///
/// Returns the mark and the line it completed.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    for line @ [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq {
            if sq == board.get(b) && sq == board.get(c) {
                return Some((mark, line));
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
