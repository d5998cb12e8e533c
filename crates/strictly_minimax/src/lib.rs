//! Tic-tac-toe rules and a depth-limited minimax opponent.
//!
//! # Architecture
//!
//! - [`types`]: board, squares, moves, outcomes
//! - [`rules`]: move generation, move application, outcome detection
//! - [`eval`]: line-pattern heuristic for unfinished boards
//! - [`search`]: immediate win/block fast paths and plain minimax
//! - [`Game`]: the mutable session a front end drives
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, choose_move, outcome, Outcome};
//!
//! // 1 is the computer, -1 the human, 0 an empty square.
//! let rows: [[i8; 3]; 3] = [[1, 1, 0], [-1, -1, 0], [0, 0, 0]];
//! let board = Board::from_rows(&rows)?;
//! assert_eq!(outcome(&board), Outcome::InProgress);
//! assert_eq!(choose_move(&board)?, Move::new(0, 2));
//! # Ok::<(), strictly_minimax::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod eval;
mod game;
pub mod rules;
pub mod search;
pub mod types;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_DEPTH, EngineConfig, MAX_WEIGHT};

// Crate-level exports - Errors
pub use error::{EngineError, InvalidMoveReason};

// Crate-level exports - Evaluation
pub use eval::{DiagonalRule, Evaluator, LineWeights, evaluate};

// Crate-level exports - Game session
pub use game::Game;

// Crate-level exports - Rules
pub use rules::{apply, legal_moves, outcome};

// Crate-level exports - Search
pub use search::{SearchResult, SearchType, Searcher, choose_move};

// Crate-level exports - Core types
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Move, Outcome, Player, Square};
