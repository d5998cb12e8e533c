//! Static evaluation of tic-tac-toe positions.
//!
//! Terminal boards score a fixed win/loss/draw value. Anything else is
//! scored line by line from the counts of each player's marks, plus a small
//! bonus for holding the center.

pub mod heuristic;
pub mod weights;

pub use heuristic::{Evaluator, evaluate};
pub use weights::{DiagonalRule, LineWeights};
