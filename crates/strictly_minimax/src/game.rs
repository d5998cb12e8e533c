//! Live game session.
//!
//! [`Game`] is the one mutable piece of the engine: it owns the board of the
//! game being played and advances it move by move. The search only ever sees
//! copies of that board.

use crate::error::EngineError;
use crate::rules::{apply, outcome};
use crate::search::{MAXIMIZER, SearchResult, Searcher};
use crate::types::{Board, Move, Outcome, Player};
use tracing::{debug, info, instrument};

/// A game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    first: Player,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game where `first` makes the opening move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who opened the game.
    pub fn first(&self) -> Player {
        self.first
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player who made the last move.
    pub fn last_player(&self) -> Option<Player> {
        if self.history.is_empty() {
            None
        } else if self.history.len() % 2 == 1 {
            Some(self.first)
        } else {
            Some(self.first.opponent())
        }
    }

    /// Plays `mv` for the player to move and returns the new outcome.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game has ended
    /// - [`EngineError::InvalidMove`] if the square is off the board or taken
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        self.board = apply(&self.board, mv, self.to_move)?;
        self.history.push(mv);
        self.outcome = outcome(&self.board);

        debug!(%mv, outcome = %self.outcome, "Move played");
        if self.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.outcome)
    }

    /// Lets `searcher` pick the computer's move and plays it.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game has ended
    /// - [`EngineError::WrongPlayer`] if it is the human's turn
    #[instrument(skip(self, searcher))]
    pub fn play_computer(&mut self, searcher: &Searcher) -> Result<SearchResult, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.to_move != MAXIMIZER {
            return Err(EngineError::WrongPlayer(MAXIMIZER));
        }

        let result = searcher.search(&self.board)?;
        self.play(*result.best_move())?;
        Ok(result)
    }
}

impl Default for Game {
    /// The human opens, as in the classic setup.
    fn default() -> Self {
        Self::new(Player::Second)
    }
}
