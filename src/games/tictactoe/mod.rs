mod action;
mod game;
mod player;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use player::Player;
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Mark, Square};
