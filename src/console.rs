//! Interactive console play.
//!
//! Reads one line per turn, prints every rejection, and re-prompts the
//! same player until a move is accepted.

use crate::games::tictactoe::{Game, GameStatus, MoveError};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Banner printed before the first board.
pub const WELCOME: &str = "WELCOME TO TIC TAC TOE\n\n\
This game is played with the number pad. To select a position, enter the\n\
number that corresponds to the same location on the number pad\n\
(e.g. the top-left corner is 7).";

/// Printed when a game ends in a draw.
pub const DRAW_MESSAGE: &str = "Game Over! No open positions";

/// Printed when the loop stops.
pub const EXIT_MESSAGE: &str = "Exiting game...";

/// Why a line of input did not become a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The input is not an integer.
    #[display("Please use the number pad to enter a number between 1 and 9.")]
    NotANumber(String),

    /// The integer was refused by the board.
    #[display("{_0}")]
    Rejected(MoveError),
}

impl std::error::Error for TurnError {}

impl From<MoveError> for TurnError {
    fn from(err: MoveError) -> Self {
        TurnError::Rejected(err)
    }
}

/// Parses one line of input as a numpad index.
///
/// Surrounding whitespace is ignored. Range is only checked for integers
/// too large to hold; the board checks everything else.
///
/// # Errors
///
/// - [`TurnError::NotANumber`] if the line is not an integer.
/// - [`TurnError::Rejected`] with [`MoveError::OutOfRange`] if it is an
///   integer that does not fit in an `i64`.
pub fn parse_input(line: &str) -> Result<i64, TurnError> {
    let trimmed = line.trim();
    trimmed.parse::<i64>().map_err(|_| {
        if is_integer(trimmed) {
            TurnError::Rejected(MoveError::OutOfRange(trimmed.to_string()))
        } else {
            TurnError::NotANumber(trimmed.to_string())
        }
    })
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Drives a [`Game`] over a line-based reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays `game` to completion.
    ///
    /// Prints the welcome banner and the empty board, then alternates turns
    /// until a win or draw, rendering the board after every accepted move.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, including the input ending before the game does.
    #[instrument(skip_all)]
    pub fn play(&mut self, game: &mut Game) -> Result<GameStatus> {
        writeln!(self.output, "{WELCOME}")?;
        self.render(game)?;

        while game.is_active() {
            self.take_turn(game)?;
            self.render(game)?;

            match game.status() {
                GameStatus::Won(mark) => {
                    let name = game
                        .winner()
                        .map_or_else(|| mark.to_string(), |p| p.name().to_string());
                    writeln!(self.output, "{name} wins!")?;
                }
                GameStatus::Draw => writeln!(self.output, "{DRAW_MESSAGE}")?,
                GameStatus::InProgress => {}
            }
        }

        writeln!(self.output, "{EXIT_MESSAGE}")?;
        self.output.flush()?;
        info!(status = ?game.status(), "Exiting game");
        Ok(game.status())
    }

    /// Prompts the current player until one move is accepted.
    #[instrument(skip_all, fields(player = %game.current_player()))]
    fn take_turn(&mut self, game: &mut Game) -> Result<()> {
        loop {
            let prompt = game.current_player().prompt();
            let line = self.read_line(&prompt)?;

            let outcome = parse_input(&line)
                .and_then(|index| game.play_move(index).map_err(TurnError::from));

            match outcome {
                Ok(status) => {
                    debug!(?status, "Move accepted");
                    return Ok(());
                }
                Err(TurnError::Rejected(MoveError::GameOver)) => {
                    bail!("turn requested after the game ended")
                }
                Err(err) => {
                    debug!(input = %line.trim(), error = %err, "Input rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line)
    }

    fn render(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output, "\n\n{}\n\n", game.board().render())?;
        Ok(())
    }
}
