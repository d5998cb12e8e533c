//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_cells(&[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells(&[-1; 9]).unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O with X = -1, O = 1
        let board = Board::from_cells(&[-1, 1, -1, 1, -1, -1, 1, -1, 1]).unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board with a completed top row
        let board = Board::from_cells(&[-1, -1, -1, 1, 1, -1, -1, 1, 1]).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
