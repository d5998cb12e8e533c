//! Tests for the search engine and evaluator over the public API.

use strictly_minimax::{
    Board, EngineConfig, EngineError, Game, Move, Outcome, Player, SearchType, Searcher,
    choose_move, evaluate, legal_moves, outcome,
};

fn board(rows: [[i8; 3]; 3]) -> Board {
    Board::from_rows(&rows).expect("Valid board")
}

#[test]
fn test_immediate_win_scenario() {
    let b = board([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]);
    assert_eq!(choose_move(&b).expect("Move"), Move::new(0, 2));
}

#[test]
fn test_immediate_block_scenario() {
    let b = board([[-1, -1, 0], [0, 1, 0], [0, 0, 0]]);
    let result = Searcher::default().search(&b).expect("Move");
    assert_eq!(*result.best_move(), Move::new(0, 2));
    assert_eq!(*result.search_type(), SearchType::Block);
}

#[test]
fn test_terminal_evaluation_ignores_board_content() {
    let boards = [
        board([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]),
        board([[1, -1, -1], [1, 0, 0], [1, 0, 0]]),
        board([[-1, -1, 1], [0, 1, 0], [1, 0, 0]]),
    ];
    for b in boards {
        assert_eq!(outcome(&b), Outcome::FirstWins);
        assert_eq!(evaluate(&b, Player::First), 1000);
        assert_eq!(evaluate(&b, Player::Second), -1000);
    }
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let boards = [
        Board::new(),
        board([[-1, 0, 0], [0, 1, 0], [0, 0, 0]]),
        board([[-1, -1, 0], [0, 1, 0], [0, 0, 1]]),
        board([[1, 0, -1], [0, -1, 0], [1, 0, 0]]),
    ];
    for b in boards {
        assert_eq!(evaluate(&b, Player::Second), -evaluate(&b, Player::First));
    }
}

#[test]
fn test_empty_board_search() {
    let mv = choose_move(&Board::new()).expect("Empty board has moves");
    assert!(mv.is_in_bounds());
}

#[test]
fn test_full_board_search_fails() {
    let b = board([[-1, 1, -1], [1, -1, -1], [1, -1, 1]]);
    assert_eq!(choose_move(&b), Err(EngineError::NoLegalMoves));
}

#[test]
fn test_search_does_not_mutate_board() {
    let b = board([[-1, 0, 0], [0, 0, 0], [0, 0, 0]]);
    let copy = b;
    let mv = choose_move(&b).expect("Move");
    assert_eq!(b, copy);
    assert!(legal_moves(&b).contains(&mv));
}

#[test]
fn test_search_is_deterministic() {
    let b = board([[-1, 0, 0], [0, 0, 0], [0, 0, -1]]);
    let searcher = Searcher::default();
    let first = searcher.search(&b).expect("Move");
    let second = searcher.search(&b).expect("Move");
    assert_eq!(first, second);
}

#[test]
fn test_deeper_search_returns_legal_move() {
    let config = EngineConfig::default().with_depth(5);
    let b = board([[-1, 0, 0], [0, 0, 0], [0, 0, 0]]);
    let mv = Searcher::new(config).choose_move(&b).expect("Move");
    assert!(b.is_empty(mv));
}

#[test]
fn test_full_game_reaches_terminal_outcome() {
    let searcher = Searcher::default();
    let mut game = Game::new(Player::First);

    // The human side takes the first free square.
    while !game.is_over() {
        if game.to_move() == Player::First {
            game.play_computer(&searcher).expect("Computer move");
        } else {
            let mv = legal_moves(game.board())[0];
            game.play(mv).expect("Human move");
        }
    }

    assert!(game.outcome().is_terminal());
    assert!(game.history().len() <= 9);
}

#[test]
fn test_computer_never_loses_to_first_free_square() {
    // A human who always takes the first free square cannot beat the
    // fast paths.
    let searcher = Searcher::default();
    let mut game = Game::default();

    while !game.is_over() {
        if game.to_move() == Player::Second {
            let mv = legal_moves(game.board())[0];
            game.play(mv).expect("Human move");
        } else {
            game.play_computer(&searcher).expect("Computer move");
        }
    }

    assert_ne!(game.outcome(), Outcome::SecondWins);
}
