//! Adversarial search for two-player, zero-sum, perfect-information games.
//!
//! Games implement [`Game`]; [`Minimax`] searches them to full depth, with
//! optional alpha-beta pruning that never changes the chosen move.
//! [`TicTacToe`] is the bundled game, together with the referee helpers
//! ([`play`], [`play_vs_computer`]) a front end needs to run a match.

mod game;
mod minimax;
mod referee;
mod tictactoe;

pub use game::{Game, Score};
pub use minimax::{Decision, Minimax, MinimaxConfig};
pub use referee::{MoveReport, play, play_vs_computer};
pub use tictactoe::{Mark, Position, TicTacToe, TicTacToeGame};

use trek_core::{Cell, InputError};

/// Choose a move for `maximizing` on `board`, with `minimizing` as the
/// opponent. The maximizing player moves first.
///
/// Players are given as `"X"` / `"O"` tokens and must differ.
pub fn run_minimax(
    board: &TicTacToe,
    maximizing: &str,
    minimizing: &str,
) -> Result<Decision<Cell>, InputError> {
    run_minimax_with(&Minimax::default(), board, maximizing, minimizing)
}

/// [`run_minimax`] with an explicitly configured engine.
pub fn run_minimax_with(
    engine: &Minimax,
    board: &TicTacToe,
    maximizing: &str,
    minimizing: &str,
) -> Result<Decision<Cell>, InputError> {
    let max: Mark = maximizing.parse()?;
    let min: Mark = minimizing.parse()?;
    if max == min {
        return Err(InputError::SamePlayers(max.to_string()));
    }
    let game = TicTacToeGame::new(max);
    let root = Position::new(board.clone(), max);
    Ok(engine.decide(&game, &root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_minimax_validates_players() {
        let b = TicTacToe::new();
        assert_eq!(
            run_minimax(&b, "X", "X").unwrap_err(),
            InputError::SamePlayers("X".into())
        );
        assert_eq!(
            run_minimax(&b, "Z", "O").unwrap_err(),
            InputError::Player("Z".into())
        );
    }

    #[test]
    fn run_minimax_opening() {
        let d = run_minimax(&TicTacToe::new(), "X", "O").unwrap();
        assert_eq!(d.best_move, Some(Cell::new(0, 0)));
        assert_eq!(d.score, 0);
    }
}
