use std::fmt::Debug;

/// Utility of a position from the maximizing player's point of view.
pub type Score = i8;

/// A two-player, zero-sum, perfect-information game.
///
/// The state carries whose turn it is. Implementations must be pure, and
/// [`moves`](Game::moves) must list moves in a fixed order: minimax keeps
/// the first move that reaches the best score.
pub trait Game {
    /// A node of the game tree: board plus side to move.
    type State: Clone;
    /// A move that can be played from a state.
    type Move: Copy + Eq + Debug;

    /// Utility of a finished game, or `None` while play continues.
    ///
    /// Must return `Some` whenever [`moves`](Game::moves) would be empty.
    fn terminal(&self, state: &Self::State) -> Option<Score>;

    /// Append the legal moves from `state` into `buf`. The caller clears
    /// `buf`.
    fn moves(&self, state: &Self::State, buf: &mut Vec<Self::Move>);

    /// The state after the side to move plays `mv`.
    fn play(&self, state: &Self::State, mv: Self::Move) -> Self::State;
}
