//! Strictly Minimax - terminal front end
//!
//! Plays tic-tac-toe against the minimax engine, or prints the engine's
//! move for a given position.

#![warn(missing_docs)]

mod cli;
mod driver;
mod render;
mod suggest;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use driver::Driver;
use strictly_minimax::{EngineConfig, Searcher};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let searcher = Searcher::new(load_config(cli.config.as_deref())?);

    match cli.command {
        Command::Play { computer_first } => run_play(searcher, computer_first),
        Command::Suggest { board } => run_suggest(&searcher, &board),
    }
}

/// Loads the engine config, falling back to defaults when no path is given.
#[instrument]
fn load_config(path: Option<&std::path::Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::from_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(searcher: Searcher, computer_first: bool) -> Result<()> {
    info!(computer_first, "Starting interactive game");
    let stdin = std::io::stdin();
    let mut driver = Driver::new(stdin.lock(), std::io::stdout(), searcher);
    driver.play(computer_first)?;
    Ok(())
}

/// Print the computer's move for a JSON board
fn run_suggest(searcher: &Searcher, board: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    suggest::suggest(searcher, board, &mut stdout)?;
    Ok(())
}
