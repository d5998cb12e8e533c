//! Search module for the computer player.
//!
//! Contains:
//! - Fast paths for immediate wins and blocks
//! - Depth-limited minimax without pruning

pub mod minimax;

pub use minimax::{MAXIMIZER, MINIMIZER, SearchResult, SearchType, Searcher, choose_move};
