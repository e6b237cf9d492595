//! Checked moves for driving a tic-tac-toe match from a front end.

use trek_core::{Cell, InputError};

use crate::minimax::Minimax;
use crate::tictactoe::{Mark, Position, TicTacToe, TicTacToeGame};

/// Board state after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    pub board: TicTacToe,
    pub winner: Option<Mark>,
    pub is_draw: bool,
    /// Side to move next, `None` once the game is over.
    pub next: Option<Mark>,
    /// The computer's reply, when one was played.
    pub computer_move: Option<Cell>,
}

impl MoveReport {
    fn new(board: TicTacToe, last: Mark, computer_move: Option<Cell>) -> Self {
        let winner = board.winner();
        let is_draw = board.is_draw();
        let next = (!board.is_over()).then(|| last.opponent());
        Self {
            board,
            winner,
            is_draw,
            next,
            computer_move,
        }
    }
}

/// Place `mark` at `cell` on `board`.
///
/// Fails with [`InputError::GameOver`] on a finished board, and with
/// [`InputError::OutOfBounds`] / [`InputError::Occupied`] for a bad square.
pub fn play(board: &TicTacToe, cell: Cell, mark: Mark) -> Result<MoveReport, InputError> {
    if board.is_over() {
        return Err(InputError::GameOver);
    }
    let next = board.place(cell, mark)?;
    Ok(MoveReport::new(next, mark, None))
}

/// Play the human's move, then let the computer answer with `engine`
/// unless the game just ended.
pub fn play_vs_computer(
    board: &TicTacToe,
    cell: Cell,
    human: Mark,
    engine: &Minimax,
) -> Result<MoveReport, InputError> {
    let after_human = play(board, cell, human)?;
    if after_human.next.is_none() {
        return Ok(after_human);
    }

    let computer = human.opponent();
    let game = TicTacToeGame::new(computer);
    let decision = engine.decide(&game, &Position::new(after_human.board.clone(), computer));
    let Some(reply) = decision.best_move else {
        log::warn!("no computer reply: {:?}", decision.termination);
        return Ok(after_human);
    };
    log::debug!("computer {computer} plays {reply} (score {})", decision.score);

    let board = after_human.board.place(reply, computer)?;
    Ok(MoveReport::new(board, computer, Some(reply)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::MinimaxConfig;

    fn board(rows: [[&str; 3]; 3]) -> TicTacToe {
        TicTacToe::from_rows(&rows).unwrap()
    }

    #[test]
    fn play_reports_state() {
        let r = play(&TicTacToe::new(), Cell::new(0, 0), Mark::X).unwrap();
        assert_eq!(r.board.get(Cell::new(0, 0)), Some(Mark::X));
        assert_eq!(r.winner, None);
        assert!(!r.is_draw);
        assert_eq!(r.next, Some(Mark::O));
        assert_eq!(r.computer_move, None);
    }

    #[test]
    fn play_detects_win_and_rejects_further_moves() {
        let b = board([["X", "X", ""], ["O", "O", ""], ["", "", ""]]);
        let r = play(&b, Cell::new(0, 2), Mark::X).unwrap();
        assert_eq!(r.winner, Some(Mark::X));
        assert_eq!(r.next, None);
        assert_eq!(
            play(&r.board, Cell::new(2, 2), Mark::O),
            Err(InputError::GameOver)
        );
    }

    #[test]
    fn play_rejects_bad_squares() {
        let b = board([["X", "", ""], ["", "", ""], ["", "", ""]]);
        assert_eq!(
            play(&b, Cell::new(0, 0), Mark::O),
            Err(InputError::Occupied(Cell::new(0, 0)))
        );
        assert_eq!(
            play(&b, Cell::new(0, 3), Mark::O),
            Err(InputError::OutOfBounds(Cell::new(0, 3)))
        );
    }

    #[test]
    fn computer_answers_corner_with_center() {
        let r = play_vs_computer(
            &TicTacToe::new(),
            Cell::new(0, 0),
            Mark::X,
            &Minimax::default(),
        )
        .unwrap();
        assert_eq!(r.computer_move, Some(Cell::new(1, 1)));
        assert_eq!(r.board.get(Cell::new(1, 1)), Some(Mark::O));
        assert_eq!(r.next, Some(Mark::X));
    }

    #[test]
    fn computer_takes_the_win() {
        let b = board([["X", "X", ""], ["", "O", ""], ["", "", ""]]);
        let r = play_vs_computer(&b, Cell::new(2, 0), Mark::O, &Minimax::default()).unwrap();
        assert_eq!(r.computer_move, Some(Cell::new(0, 2)));
        assert_eq!(r.winner, Some(Mark::X));
        assert_eq!(r.next, None);
    }

    #[test]
    fn no_reply_after_final_move() {
        let b = board([["X", "O", "X"], ["O", "X", "O"], ["O", "X", ""]]);
        let r = play_vs_computer(&b, Cell::new(2, 2), Mark::O, &Minimax::default()).unwrap();
        assert_eq!(r.computer_move, None);
        assert!(r.is_draw);
        assert_eq!(r.next, None);
    }

    #[test]
    fn budget_exhaustion_skips_reply() {
        let engine = Minimax::new(MinimaxConfig {
            pruning: true,
            max_nodes: Some(1),
        });
        let r = play_vs_computer(&TicTacToe::new(), Cell::new(1, 1), Mark::X, &engine).unwrap();
        assert_eq!(r.computer_move, None);
        assert_eq!(r.next, Some(Mark::O));
    }
}
