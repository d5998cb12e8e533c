//! One-shot move suggestion for a board given as JSON.

use crate::render;
use anyhow::{Context, Result, bail};
use std::io::Write;
use strictly_minimax::{Board, SearchResult, Searcher, outcome};
use tracing::{debug, instrument};

/// Parses `board_json`, searches it, and writes the board and chosen move.
///
/// Fails on malformed JSON, on boards outside the `{-1, 0, 1}` encoding,
/// and on boards that are already decided.
#[instrument(skip(searcher, output))]
pub fn suggest<W: Write>(
    searcher: &Searcher,
    board_json: &str,
    output: &mut W,
) -> Result<SearchResult> {
    let board: Board = serde_json::from_str(board_json).context("Failed to parse board")?;

    let status = outcome(&board);
    if status.is_terminal() {
        bail!("Board is already finished: {}", status);
    }

    let result = searcher.search(&board)?;
    debug!(mv = %result.best_move(), nodes = *result.nodes(), "Suggested move");

    write!(output, "{}", render::board(&board))?;
    writeln!(
        output,
        "Suggested move: {} [{}] via {} (score {}, {} nodes)",
        result.best_move(),
        result.best_move().label(),
        result.search_type(),
        result.score(),
        result.nodes()
    )?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::{Move, SearchType};

    fn run(board_json: &str) -> (Result<SearchResult>, String) {
        let mut output = Vec::new();
        let result = suggest(&Searcher::default(), board_json, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_suggests_winning_move() {
        let (result, output) = run("[[1,1,0],[-1,-1,0],[0,0,0]]");
        let result = result.unwrap();
        assert_eq!(*result.best_move(), Move::new(0, 2));
        assert_eq!(*result.search_type(), SearchType::ImmediateWin);
        assert!(output.starts_with("[O][O][ ]\n[X][X][ ]\n[ ][ ][ ]\n"));
        assert!(output.contains("Suggested move: (0, 2) [Top-right] via immediate win"));
    }

    #[test]
    fn test_rejects_invalid_mark() {
        let (result, output) = run("[[5,0,0],[0,0,0],[0,0,0]]");
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse board"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let (result, _) = run("[[0,0,0],[0,0,0]]");
        assert!(result.is_err());
    }

    #[test]
    fn test_refuses_finished_board() {
        let (result, output) = run("[[1,1,1],[-1,-1,0],[0,0,0]]");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("already finished"));
        assert!(err.to_string().contains("Computer wins"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_refuses_drawn_board() {
        let (result, _) = run("[[-1,1,-1],[1,-1,-1],[1,-1,1]]");
        assert!(result.unwrap_err().to_string().contains("Draw"));
    }
}
