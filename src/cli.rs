//! Command-line interface for numpad_tictactoe.

use clap::Parser;

/// Numpad Tic-Tac-Toe - two players, one keyboard
///
/// Takes no arguments besides `--help` and `--version`. Anything else is
/// rejected by clap with exit status 2 before a game starts.
#[derive(Parser, Debug)]
#[command(name = "numpad_tictactoe")]
#[command(about = "Two-player tic-tac-toe played from the number pad", long_about = None)]
#[command(version)]
pub struct Cli {}
