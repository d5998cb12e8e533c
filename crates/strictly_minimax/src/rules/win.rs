//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight lines of three, as row-major indices.
///
/// Order matters: rows top to bottom, then columns left to right, then the
/// main diagonal and the anti-diagonal. The first complete line decides.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The two diagonals of [`LINES`].
const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Whether a line of [`LINES`] is one of the two diagonals.
pub fn is_diagonal(line: &[usize; 3]) -> bool {
    DIAGONALS.contains(line)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] order held
/// entirely by one player, `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return sq.player();
        }
    }

    None
}
