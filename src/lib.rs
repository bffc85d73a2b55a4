//! Numpad tic-tac-toe library
//!
//! Two players take turns marking a 3x3 grid addressed like a number pad
//! (7-8-9 on top, 1-2-3 on the bottom). Three identical marks in a row,
//! column, or diagonal win; a full board without one is a draw.
//!
//! # Architecture
//!
//! - **Games**: the rules engine (cells, board, win/draw rules, turn order)
//! - **Console**: the interactive prompt loop over any reader and writer
//! - **Config**: player names and marks
//!
//! # Example
//!
//! ```
//! use numpad_tictactoe::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! for index in [1, 4, 2, 5] {
//!     game.play_move(index).unwrap();
//! }
//! assert_eq!(game.play_move(3).unwrap(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, SeatConfig};

// Crate-level exports - Console play
pub use console::{Console, DRAW_MESSAGE, EXIT_MESSAGE, TurnError, WELCOME, parse_input};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, Cell, Game, GameStatus, Mark, Move, MoveError, Player, Position, Square, rules,
};
