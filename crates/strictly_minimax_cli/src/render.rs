//! Text rendering of the board and game status.

use strictly_minimax::{BOARD_SIZE, Board, Game, Move, Player, Square};

/// Separator printed above every board.
const RULE: &str = "-----------------------------------------------------";

/// Draws the board as three rows of `[O]`, `[X]` and `[ ]` cells.
pub fn board(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let symbol = match board.get(Move::new(row, col)) {
                Some(Square::Occupied(player)) => player.symbol(),
                _ => ' ',
            };
            result.push('[');
            result.push(symbol);
            result.push(']');
        }
        result.push('\n');
    }
    result
}

/// Draws the board followed by who moved last and the game status.
pub fn status(game: &Game) -> String {
    let mut result = String::from(RULE);
    result.push('\n');
    result.push_str(&board(game.board()));

    match game.last_player() {
        Some(Player::First) => result.push_str("Last move was conducted by computer\n"),
        Some(Player::Second) => result.push_str("Last move was conducted by you\n"),
        None => {}
    }

    result.push_str(&game.outcome().to_string());
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        assert_eq!(board(&Board::new()), "[ ][ ][ ]\n[ ][ ][ ]\n[ ][ ][ ]\n");
    }

    #[test]
    fn test_marks() {
        let rows: [[i8; 3]; 3] = [[1, -1, 0], [0, 1, 0], [0, 0, -1]];
        let b = Board::from_rows(&rows).unwrap();
        assert_eq!(board(&b), "[O][X][ ]\n[ ][O][ ]\n[ ][ ][X]\n");
    }

    #[test]
    fn test_status_after_human_move() {
        let mut game = Game::default();
        game.play(Move::new(1, 0)).unwrap();
        let text = status(&game);
        assert!(text.starts_with(RULE));
        assert!(text.contains("[ ][ ][ ]\n[X][ ][ ]\n"));
        assert!(text.contains("Last move was conducted by you"));
        assert!(text.ends_with("Game going on\n"));
    }
}
