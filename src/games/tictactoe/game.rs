//! Turn sequencing for tic-tac-toe.
//!
//! A [`Game`] owns the board and both players. Each accepted move is
//! followed by a terminal check: a win is looked for first, then a draw.
//! Once either is found the game is inactive for good.

use super::action::{Move, MoveError};
use super::rules;
use super::{Board, GameStatus, Player, Position};
use crate::config::GameConfig;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game between two players.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next.
    turn: usize,
    active: bool,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game between the default players.
    #[instrument]
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Creates a game seating the players described by `config`.
    ///
    /// The first seat moves first.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let players = config.players();
        info!(first = %players[0], second = %players[1], "New game");
        Self {
            board: Board::new(),
            players,
            turn: 0,
            active: true,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player whose turn it is.
    ///
    /// After the game ends this is the player who made the last move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns true until a win or draw has been detected.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player who won, if any.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => self.players.iter().find(|p| p.mark() == mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Plays the numpad index `index` for the current player.
    ///
    /// On success the board is updated, the terminal check runs, and the
    /// turn passes to the other player unless the game just ended. On
    /// failure nothing changes and the same player is still to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::OutOfRange`] if `index` is not 1-9.
    /// - [`MoveError::AlreadyOccupied`] if the cell is already marked.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_move(&mut self, index: i64) -> Result<GameStatus, MoveError> {
        if !self.active {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_player().mark();
        let position = self.board.apply_move(index, mark)?;
        self.history.push(Move::new(mark, position));
        debug!(%position, %mark, "Move applied");

        self.status = self.check_terminal();
        if self.status.is_terminal() {
            self.active = false;
            info!(status = ?self.status, moves = self.history.len(), "Game finished");
        } else {
            self.turn = 1 - self.turn;
        }

        Ok(self.status)
    }

    /// Plays a known position for the current player.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_move`], minus the range check.
    pub fn play_position(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        self.play_move(i64::from(position.index()))
    }

    /// Win takes precedence over draw.
    fn check_terminal(&self) -> GameStatus {
        if let Some(mark) = rules::check_winner(&self.board) {
            GameStatus::Won(mark)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
