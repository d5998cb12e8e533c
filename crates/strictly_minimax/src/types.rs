//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
///
/// `First` is the computer (the maximizer, drawn as `O`) and `Second` is the
/// human (the minimizer, drawn as `X`). Which of them moves first in a given
/// game is decided by [`Game`](crate::Game), not by the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// The computer, marked `1`.
    First,
    /// The human, marked `-1`.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Signed mark used in the numeric board encoding.
    pub fn mark(self) -> i8 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// Symbol drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'O',
            Player::Second => 'X',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Signed mark: `1` for First, `-1` for Second, `0` for empty.
    pub fn mark(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.mark(),
        }
    }

    /// Decodes a signed mark, `None` for anything outside `{-1, 0, 1}`.
    pub fn from_mark(mark: i8) -> Option<Self> {
        match mark {
            0 => Some(Square::Empty),
            1 => Some(Square::Occupied(Player::First)),
            -1 => Some(Square::Occupied(Player::Second)),
            _ => None,
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A move: the `(row, col)` coordinate of the square to mark, 0-indexed.
///
/// A `Move` is not checked on construction, so it can name a square off the
/// board. [`apply`](crate::apply) rejects those.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Move {
    /// The center square.
    pub const CENTER: Move = Move { row: 1, col: 1 };

    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the board.
    pub fn is_in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index (0-8), `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.is_in_bounds().then(|| self.row * BOARD_SIZE + self.col)
    }

    /// Creates a move from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Human-readable name of the square.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; CELL_COUNT] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        self.index().map_or("Off-board", |i| LABELS[i])
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every rule that changes a board returns a new
/// one. Serialized as a 3x3 array of signed marks, e.g.
/// `[[1,1,0],[-1,-1,0],[0,0,0]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i8>>", into = "Vec<Vec<i8>>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from rows of signed marks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedBoard`] unless there are exactly three
    /// rows of three marks, each in `{-1, 0, 1}`.
    #[instrument(skip(rows))]
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, EngineError> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::MalformedBoard(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(EngineError::MalformedBoard(format!(
                    "row {} has {} cells, expected {}",
                    row_index,
                    row.len(),
                    BOARD_SIZE
                )));
            }
            cells.extend_from_slice(row);
        }

        Self::from_cells(&cells)
    }

    /// Builds a board from nine signed marks in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedBoard`] on a wrong cell count or a
    /// mark outside `{-1, 0, 1}`.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(cells: &[i8]) -> Result<Self, EngineError> {
        if cells.len() != CELL_COUNT {
            return Err(EngineError::MalformedBoard(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            )));
        }

        let mut squares = [Square::Empty; CELL_COUNT];
        for (index, (slot, &mark)) in squares.iter_mut().zip(cells).enumerate() {
            *slot = Square::from_mark(mark).ok_or_else(|| {
                EngineError::MalformedBoard(format!("cell {} holds invalid mark {}", index, mark))
            })?;
        }

        Ok(Self { squares })
    }

    /// Gets the square at the given coordinate, `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|i| self.squares[i])
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Returns the board as rows of signed marks.
    pub fn to_rows(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (index, square) in self.squares.iter().enumerate() {
            rows[index / BOARD_SIZE][index % BOARD_SIZE] = square.mark();
        }
        rows
    }

    /// Copy of this board with one in-bounds square replaced.
    pub(crate) fn with_square(mut self, index: usize, square: Square) -> Self {
        self.squares[index] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<i8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<i8>> {
    fn from(board: Board) -> Self {
        board.to_rows().iter().map(|row| row.to_vec()).collect()
    }
}

/// Result of evaluating a board against the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter)]
pub enum Outcome {
    /// Three in a row for [`Player::First`].
    #[display("Computer wins")]
    FirstWins,
    /// Three in a row for [`Player::Second`].
    #[display("You win")]
    SecondWins,
    /// Full board, no line.
    #[display("Draw")]
    Draw,
    /// Game still going.
    #[display("Game going on")]
    InProgress,
}

impl Outcome {
    /// Outcome for a game won by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::First => Outcome::FirstWins,
            Player::Second => Outcome::SecondWins,
        }
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::FirstWins => Some(Player::First),
            Outcome::SecondWins => Some(Player::Second),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}
