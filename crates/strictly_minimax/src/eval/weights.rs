//! Tunable weights for the line heuristic.

use serde::{Deserialize, Serialize};

/// Scores for line patterns, from [`Player::First`](crate::Player)'s side.
///
/// Scoring for [`Player::Second`](crate::Player) negates the total, so the
/// signs here read as "good for the computer" when positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineWeights {
    /// Magnitude of a decided game.
    pub win: i32,
    /// Two opponent marks and no own marks on a line.
    pub opponent_pair: i32,
    /// Two own marks and no opponent marks on a line.
    pub own_pair: i32,
    /// One opponent mark alone on a line.
    pub opponent_single: i32,
    /// One own mark alone on a line.
    pub own_single: i32,
    /// Own mark on the center square.
    pub center: i32,
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            win: 1000,
            opponent_pair: -200,
            own_pair: 100,
            opponent_single: -50,
            own_single: 20,
            center: 10,
        }
    }
}

/// How the two diagonals are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalRule {
    /// Diagonals use the same mark-count rule as rows and columns.
    #[default]
    Uniform,
    /// Diagonals are scored from the sum of their signed marks: only a sum
    /// of `2` or `-2` counts, as a pair. Singles on a diagonal score nothing.
    LegacySum,
}
