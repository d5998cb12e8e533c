//! Terminal game loop.
//!
//! Owns the live [`Game`], alternates turns, reads the human's moves from any
//! `BufRead` and writes the board to any `Write`, so the loop runs the same
//! against a terminal or an in-memory buffer.

use crate::render;
use anyhow::{Context, Result, bail};
use derive_more::Display;
use std::io::{BufRead, Write};
use strictly_minimax::{BOARD_SIZE, Game, Move, Outcome, Player, Searcher};
use tracing::{debug, info, instrument, warn};

/// Why a line of human input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// The line was not two comma-separated integers.
    #[display("Invalid input, expected two numbers like `1, 0`")]
    Unparsable,
    /// A coordinate was outside the board.
    #[display("Invalid input, the two numbers should lie in [0, 2]")]
    OutOfRange,
    /// The square already holds a mark.
    #[display("You can not put cross on places already occupied")]
    Occupied,
}

impl std::error::Error for InputError {}

/// Parses `row, col` into a move and checks it against the game.
#[instrument(skip(game))]
pub fn parse_move(line: &str, game: &Game) -> Result<Move, InputError> {
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::Unparsable);
    };

    let row: i64 = row.parse().map_err(|_| InputError::Unparsable)?;
    let col: i64 = col.parse().map_err(|_| InputError::Unparsable)?;

    let in_range = |v: i64| (0..BOARD_SIZE as i64).contains(&v);
    if !in_range(row) || !in_range(col) {
        return Err(InputError::OutOfRange);
    }

    let mv = Move::new(row as usize, col as usize);
    if !game.board().is_empty(mv) {
        return Err(InputError::Occupied);
    }

    Ok(mv)
}

/// Runs games between a human on `input`/`output` and the searcher.
pub struct Driver<R, W> {
    input: R,
    output: W,
    searcher: Searcher,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a new driver.
    pub fn new(input: R, output: W, searcher: Searcher) -> Self {
        Self {
            input,
            output,
            searcher,
        }
    }

    /// Plays one game to the end and returns its outcome.
    ///
    /// The human opens unless `computer_first` is set.
    #[instrument(skip(self))]
    pub fn play(&mut self, computer_first: bool) -> Result<Outcome> {
        let first = if computer_first {
            Player::First
        } else {
            Player::Second
        };
        let mut game = Game::new(first);
        info!(?first, "Starting game");

        while !game.is_over() {
            match game.to_move() {
                Player::Second => {
                    let mv = self.read_human_move(&game)?;
                    game.play(mv)?;
                }
                Player::First => {
                    let result = game.play_computer(&self.searcher)?;
                    debug!(
                        mv = %result.best_move(),
                        search_type = %result.search_type(),
                        nodes = *result.nodes(),
                        "Computer moved"
                    );
                }
            }
            write!(self.output, "{}", render::status(&game))?;
        }

        info!(outcome = %game.outcome(), "Game over");
        Ok(game.outcome())
    }

    /// Prompts until the human enters a legal move.
    fn read_human_move(&mut self, game: &Game) -> Result<Move> {
        writeln!(self.output, "Input the row and column index of your move")?;
        writeln!(self.output, "1, 0 means draw a cross on the row 1, col 0")?;

        loop {
            self.output.flush()?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed before the game finished");
            }

            match parse_move(&line, game) {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    warn!(input = line.trim(), error = %e, "Rejected move");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Consumes the driver, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
