//! Heuristic evaluation function for tic-tac-toe positions.

use super::weights::{DiagonalRule, LineWeights};
use crate::rules::{LINES, is_diagonal, outcome};
use crate::types::{Board, Move, Outcome, Player, Square};
use tracing::{instrument, trace};

/// Line-pattern evaluator.
///
/// Scores are symmetric: for every board,
/// `evaluate(board, Second) == -evaluate(board, First)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    weights: LineWeights,
    diagonal_rule: DiagonalRule,
}

impl Evaluator {
    /// Creates an evaluator with the given weights and diagonal rule.
    pub fn new(weights: LineWeights, diagonal_rule: DiagonalRule) -> Self {
        Self {
            weights,
            diagonal_rule,
        }
    }

    /// Returns the weights in use.
    pub fn weights(&self) -> &LineWeights {
        &self.weights
    }

    /// Returns the diagonal rule in use.
    pub fn diagonal_rule(&self) -> DiagonalRule {
        self.diagonal_rule
    }

    /// Evaluate the board from the perspective of the given player.
    ///
    /// Returns a score where:
    /// - `win` (default 1000) means `perspective` has won
    /// - `-win` means `perspective` has lost
    /// - `0` is a draw
    /// - anything else is a positional estimate, positive when it favours
    ///   `perspective`
    #[must_use]
    #[instrument(level = "trace", skip(self, board))]
    pub fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        let score = match outcome(board) {
            Outcome::Draw => 0,
            Outcome::InProgress => signed(self.positional_score(board), perspective),
            decided => {
                if decided.winner() == Some(perspective) {
                    self.weights.win
                } else {
                    self.weights.win.saturating_neg()
                }
            }
        };
        trace!(score, "Evaluated board");
        score
    }

    /// Positional score from [`Player::First`]'s side, ignoring terminal
    /// state.
    pub fn positional_score(&self, board: &Board) -> i32 {
        let squares = board.squares();

        let mut score: i32 = LINES
            .iter()
            .map(|line| {
                let cells = line.map(|i| squares[i]);
                match self.diagonal_rule {
                    DiagonalRule::LegacySum if is_diagonal(line) => self.sum_score(&cells),
                    _ => self.count_score(&cells),
                }
            })
            .fold(0, i32::saturating_add);

        if board.get(Move::CENTER) == Some(Square::Occupied(Player::First)) {
            score = score.saturating_add(self.weights.center);
        }

        score
    }

    /// Scores a line from how many marks each side holds on it.
    fn count_score(&self, cells: &[Square; 3]) -> i32 {
        let first = cells
            .iter()
            .filter(|&&s| s == Square::Occupied(Player::First))
            .count();
        let second = cells
            .iter()
            .filter(|&&s| s == Square::Occupied(Player::Second))
            .count();

        match (first, second) {
            (0, 2) => self.weights.opponent_pair,
            (2, 0) => self.weights.own_pair,
            (0, 1) => self.weights.opponent_single,
            (1, 0) => self.weights.own_single,
            _ => 0,
        }
    }

    /// Scores a line from the sum of its signed marks.
    fn sum_score(&self, cells: &[Square; 3]) -> i32 {
        let sum: i32 = cells.iter().map(|s| i32::from(s.mark())).sum();
        match sum {
            2 => self.weights.own_pair,
            -2 => self.weights.own_pair.saturating_neg(),
            _ => 0,
        }
    }
}

/// Converts a First-side score to `perspective`'s side.
fn signed(score: i32, perspective: Player) -> i32 {
    score.saturating_mul(i32::from(perspective.mark()))
}

/// Evaluates `board` for `perspective` with the default weights.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    Evaluator::default().evaluate(board, perspective)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [i8; 9]) -> Board {
        Board::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::new(), Player::First), 0);
        assert_eq!(evaluate(&Board::new(), Player::Second), 0);
    }

    #[test]
    fn test_center_mark_scores_lines_and_bonus() {
        let b = board([0, 0, 0, 0, 1, 0, 0, 0, 0]);
        // Four singles through the center plus the center bonus.
        assert_eq!(evaluate(&b, Player::First), 4 * 20 + 10);
        assert_eq!(evaluate(&b, Player::Second), -(4 * 20 + 10));
    }

    #[test]
    fn test_opponent_center_gets_no_bonus() {
        let b = board([0, 0, 0, 0, -1, 0, 0, 0, 0]);
        assert_eq!(evaluate(&b, Player::First), 4 * -50);
    }

    #[test]
    fn test_opponent_pair_outweighs_own_pair() {
        // X X _ / _ _ _ / O O _
        let b = board([-1, -1, 0, 0, 0, 0, 1, 1, 0]);
        // Rows: -200 and +100. Columns 0 and 1 are mixed, column 2 empty.
        assert_eq!(evaluate(&b, Player::First), -100 + (-50) + 20);
    }

    #[test]
    fn test_mixed_lines_score_nothing() {
        // O X O / X O X / _ _ _
        let b = board([1, -1, 1, -1, 1, -1, 0, 0, 0]);
        let score = Evaluator::default().positional_score(&b);
        // Rows 0 and 1 mixed, row 2 empty. Columns 0,1,2 mixed.
        // Diagonal 0-4-8 holds two O; anti-diagonal 2-4-6 holds two O.
        assert_eq!(score, 100 + 100 + 10);
    }

    #[test]
    fn test_terminal_short_circuit() {
        // O O O / X X _ / _ _ _
        let b = board([1, 1, 1, -1, -1, 0, 0, 0, 0]);
        assert_eq!(evaluate(&b, Player::First), 1000);
        assert_eq!(evaluate(&b, Player::Second), -1000);
    }

    #[test]
    fn test_draw_scores_zero() {
        let b = board([-1, 1, -1, 1, -1, -1, 1, -1, 1]);
        assert_eq!(evaluate(&b, Player::First), 0);
        assert_eq!(evaluate(&b, Player::Second), 0);
    }

    #[test]
    fn test_legacy_sum_ignores_diagonal_singles() {
        let b = board([1, 0, 0, 0, 0, 0, 0, 0, 0]);
        let uniform = Evaluator::default();
        let legacy = Evaluator::new(LineWeights::default(), DiagonalRule::LegacySum);
        assert_eq!(uniform.evaluate(&b, Player::First), 3 * 20);
        assert_eq!(legacy.evaluate(&b, Player::First), 2 * 20);
    }

    #[test]
    fn test_legacy_sum_scores_diagonal_pairs_as_own_pair() {
        // X _ _ / _ X _ / _ _ _ : diagonal sum is -2.
        let b = board([-1, 0, 0, 0, -1, 0, 0, 0, 0]);
        let legacy = Evaluator::new(LineWeights::default(), DiagonalRule::LegacySum);
        // Row 0, col 0, row 1, col 1 singles; anti-diagonal single ignored;
        // main diagonal -100 instead of -200.
        assert_eq!(legacy.evaluate(&b, Player::First), 4 * -50 - 100);
        assert_eq!(Evaluator::default().evaluate(&b, Player::First), 4 * -50 - 50 - 200);
    }

    #[test]
    fn test_custom_weights() {
        let weights = LineWeights {
            center: 0,
            own_single: 1,
            ..LineWeights::default()
        };
        let evaluator = Evaluator::new(weights, DiagonalRule::Uniform);
        let b = board([0, 0, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(evaluator.evaluate(&b, Player::First), 4);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let weights = LineWeights {
            win: i32::MIN,
            own_single: i32::MAX,
            center: i32::MAX,
            ..LineWeights::default()
        };
        let evaluator = Evaluator::new(weights, DiagonalRule::Uniform);

        let b = board([0, 0, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(evaluator.evaluate(&b, Player::First), i32::MAX);
        assert_eq!(evaluator.evaluate(&b, Player::Second), -i32::MAX);

        // Top row for Second: the loss is -win, which saturates.
        let lost = board([-1, -1, -1, 1, 1, 0, 0, 0, 0]);
        assert_eq!(evaluator.evaluate(&lost, Player::First), i32::MAX);
    }
}
