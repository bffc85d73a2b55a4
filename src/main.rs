//! Numpad Tic-Tac-Toe
//!
//! Runs one interactive game on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use numpad_tictactoe::{Console, Game, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so the game transcript stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting numpad tic-tac-toe");

    let mut game = Game::from_config(&GameConfig::default());
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.play(&mut game)?;

    Ok(())
}
