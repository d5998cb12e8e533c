//! Depth-limited minimax for the computer player.
//!
//! The computer is always [`Player::First`], the maximizer. A search runs in
//! three steps:
//!
//! 1. take a move that wins on the spot
//! 2. otherwise take a square the opponent would win on next
//! 3. otherwise score every candidate with minimax and keep the best
//!
//! Depth counts plies, including the candidate move at the root. With the
//! default depth of 3 the search looks at the computer's move, every reply,
//! and every follow-up before falling back to the heuristic. There is no
//! pruning: every node under the bound is visited.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::eval::Evaluator;
use crate::rules::{apply, legal_moves, outcome};
use crate::types::{Board, Move, Outcome, Player};
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument, trace};

/// The side the search plays for.
pub const MAXIMIZER: Player = Player::First;

/// The side the search plays against.
pub const MINIMIZER: Player = Player::Second;

/// Which step of the search produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SearchType {
    /// The move completes a line for the computer.
    #[display("immediate win")]
    ImmediateWin,
    /// The move takes the square the opponent would have won on.
    #[display("block")]
    Block,
    /// The move scored best under minimax.
    #[display("minimax")]
    Minimax,
}

/// Result of a move search with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct SearchResult {
    /// Move chosen for the computer.
    best_move: Move,
    /// Value of the chosen move. For fast paths this is the heuristic score
    /// of the board after the move, from the computer's side.
    score: i32,
    /// Step that produced the move.
    search_type: SearchType,
    /// Boards examined.
    nodes: u64,
}

/// Minimax searcher.
///
/// Holds configuration only, so one searcher can serve any number of
/// searches, from any thread.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: EngineConfig,
    evaluator: Evaluator,
}

impl Searcher {
    /// Creates a searcher from configuration.
    #[instrument(skip(config), fields(depth = *config.depth()))]
    pub fn new(config: EngineConfig) -> Self {
        let evaluator = Evaluator::new(*config.weights(), *config.diagonal_rule());
        Self { config, evaluator }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the evaluator in use.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Picks the computer's move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoLegalMoves`] if the board is full
    /// - [`EngineError::GameOver`] if the board already has a winner
    pub fn choose_move(&self, board: &Board) -> Result<Move, EngineError> {
        self.search(board).map(|result| result.best_move)
    }

    /// Picks the computer's move and reports how it was found.
    ///
    /// # Errors
    ///
    /// Same as [`Searcher::choose_move`].
    #[instrument(skip(self, board), fields(depth = *self.config.depth()))]
    pub fn search(&self, board: &Board) -> Result<SearchResult, EngineError> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }
        if outcome(board).is_terminal() {
            return Err(EngineError::GameOver);
        }

        let mut nodes = 0;

        if *self.config.immediate_win()
            && let Some(mv) = self.find_winning_square(board, &moves, MAXIMIZER, &mut nodes)?
        {
            debug!(%mv, "Taking immediate win");
            let score = self.evaluator.evaluate(&apply(board, mv, MAXIMIZER)?, MAXIMIZER);
            return Ok(SearchResult::new(mv, score, SearchType::ImmediateWin, nodes));
        }

        if *self.config.immediate_block()
            && let Some(mv) = self.find_winning_square(board, &moves, MINIMIZER, &mut nodes)?
        {
            debug!(%mv, "Blocking opponent win");
            let score = self.evaluator.evaluate(&apply(board, mv, MAXIMIZER)?, MAXIMIZER);
            return Ok(SearchResult::new(mv, score, SearchType::Block, nodes));
        }

        let child_depth = self.config.depth().saturating_sub(1);
        let mut best: Option<(Move, i32)> = None;

        for &mv in &moves {
            let child = apply(board, mv, MAXIMIZER)?;
            let value = self.min_node(&child, child_depth, &mut nodes)?;
            trace!(%mv, value, "Scored candidate");

            // Strictly greater: the first move in row-major order wins ties.
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let (mv, score) = best.ok_or(EngineError::NoLegalMoves)?;
        debug!(%mv, score, nodes, "Minimax selected move");
        Ok(SearchResult::new(mv, score, SearchType::Minimax, nodes))
    }

    /// Value of `board` with the computer to move.
    ///
    /// At a finished board or at depth 0 this is the heuristic score from
    /// the computer's side; otherwise the best reply value over all moves.
    pub fn max_value(&self, board: &Board, depth: u32) -> Result<i32, EngineError> {
        self.max_node(board, depth, &mut 0)
    }

    /// Value of `board` with the opponent to move.
    ///
    /// At a finished board or at depth 0 this is the heuristic score from
    /// the opponent's side; otherwise the lowest reply value over all moves.
    pub fn min_value(&self, board: &Board, depth: u32) -> Result<i32, EngineError> {
        self.min_node(board, depth, &mut 0)
    }

    /// First square in row-major order where `player` completes a line.
    fn find_winning_square(
        &self,
        board: &Board,
        moves: &[Move],
        player: Player,
        nodes: &mut u64,
    ) -> Result<Option<Move>, EngineError> {
        for &mv in moves {
            *nodes += 1;
            if outcome(&apply(board, mv, player)?) == Outcome::won_by(player) {
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }

    fn max_node(&self, board: &Board, depth: u32, nodes: &mut u64) -> Result<i32, EngineError> {
        *nodes += 1;
        if depth == 0 || outcome(board).is_terminal() {
            return Ok(self.evaluator.evaluate(board, MAXIMIZER));
        }

        let mut value = i32::MIN;
        for mv in legal_moves(board) {
            let child = apply(board, mv, MAXIMIZER)?;
            value = value.max(self.min_node(&child, depth - 1, nodes)?);
        }
        Ok(value)
    }

    fn min_node(&self, board: &Board, depth: u32, nodes: &mut u64) -> Result<i32, EngineError> {
        *nodes += 1;
        if depth == 0 || outcome(board).is_terminal() {
            return Ok(self.evaluator.evaluate(board, MINIMIZER));
        }

        let mut value = i32::MAX;
        for mv in legal_moves(board) {
            let child = apply(board, mv, MINIMIZER)?;
            value = value.min(self.max_node(&child, depth - 1, nodes)?);
        }
        Ok(value)
    }
}

/// Picks the computer's move with the default configuration.
///
/// # Errors
///
/// See [`Searcher::choose_move`].
pub fn choose_move(board: &Board) -> Result<Move, EngineError> {
    Searcher::default().choose_move(board)
}
