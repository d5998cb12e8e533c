//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - play tic-tac-toe against a depth-limited minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Let the computer open the game instead of you
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the computer's move for a position
    Suggest {
        /// Board as a JSON 3x3 array: 1 computer, -1 human, 0 empty
        #[arg(short, long)]
        board: String,
    },
}
