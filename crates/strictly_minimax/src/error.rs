//! Engine error types.

use crate::types::{Move, Player};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// The coordinate is not on the board.
    #[display("out of bounds")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
}

/// Error raised by the rules, the search, or the game session.
///
/// Every variant is a broken contract on the caller's side; none of them is
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The move targets a square off the board or one already marked.
    #[display("Invalid move {}: {}", _0, _1)]
    InvalidMove(Move, InvalidMoveReason),

    /// A search was requested on a board with no empty squares.
    #[display("No legal moves available")]
    NoLegalMoves,

    /// Raw board data had the wrong shape or an unknown mark.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for EngineError {}
