//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: move generation, move application,
//! and outcome classification. Rules never mutate a board; applying a move
//! returns a new one.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, is_diagonal};

use crate::error::{EngineError, InvalidMoveReason};
use crate::types::{Board, CELL_COUNT, Move, Outcome, Player, Square};
use tracing::instrument;

/// Returns every empty square in row-major order.
///
/// The order is part of the contract: the search breaks ties in favour of
/// the first move found.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    (0..CELL_COUNT)
        .filter(|&i| board.squares()[i] == Square::Empty)
        .filter_map(Move::from_index)
        .collect()
}

/// Places `player`'s mark at `mv`, returning the new board.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMove`] if `mv` is off the board or the
/// square is already occupied.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, mv: Move, player: Player) -> Result<Board, EngineError> {
    let index = mv
        .index()
        .ok_or(EngineError::InvalidMove(mv, InvalidMoveReason::OutOfBounds))?;

    if board.squares()[index] != Square::Empty {
        return Err(EngineError::InvalidMove(mv, InvalidMoveReason::Occupied));
    }

    Ok(board.with_square(index, Square::Occupied(player)))
}

/// Classifies the board.
///
/// A completed line wins (first line in [`LINES`] order), otherwise a full
/// board is a draw, otherwise the game is in progress.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::won_by(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
