use thiserror::Error;

use crate::geom::Cell;

/// Malformed input rejected before any engine runs.
///
/// Unreachable goals and exhausted budgets are *not* errors; they are
/// reported through [`Termination`](crate::Termination).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A board row does not match the board height.
    #[error("board must be square: row {row} has {width} cells, expected {expected}")]
    GridShape {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// The board is smaller than 2×2.
    #[error("board side must be at least 2, got {0}")]
    GridTooSmall(usize),
    /// Tiles are not exactly `0..side*side`, each once.
    #[error("a {side}x{side} board must hold each tile 0 to {max} exactly once")]
    TileSet { side: usize, max: usize },
    /// Start and goal boards have different sizes.
    #[error("start board is {start}x{start} but goal board is {goal}x{goal}")]
    SizeMismatch { start: usize, goal: usize },
    /// A jug capacity is zero.
    #[error("capacity of jug {jug} must be greater than zero")]
    Capacity { jug: usize },
    /// A goal level cannot fit in the jug(s) it constrains.
    #[error("goal level {level} exceeds capacity {capacity}")]
    GoalLevel { level: u32, capacity: u32 },
    /// A start level exceeds its jug's capacity.
    #[error("start state ({0}, {1}) exceeds the jug capacities")]
    StartState(u32, u32),
    /// The cost matrix has no cities.
    #[error("cost matrix is empty")]
    EmptyMatrix,
    /// A city is referenced but not a key of the cost matrix.
    #[error("unknown city {0:?}")]
    UnknownCity(String),
    /// The cost matrix lacks the edge `from -> to`.
    #[error("cost matrix has no edge from {from:?} to {to:?}")]
    MissingEdge { from: String, to: String },
    /// A player token is not one of `X` / `O`.
    #[error("invalid player token {0:?}, expected \"X\" or \"O\"")]
    Player(String),
    /// Both sides were given the same mark.
    #[error("players must use different marks, both are {0:?}")]
    SamePlayers(String),
    /// A board square outside the board.
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),
    /// A move onto an occupied square.
    #[error("cell {0} is already occupied")]
    Occupied(Cell),
    /// A move on a finished game.
    #[error("the game is already over")]
    GameOver,
    /// A best-first blend other than 0 or 1.
    #[error("alpha must be 0 (greedy) or 1 (A*), got {0}")]
    Alpha(u8),
    /// A tour strategy name other than `dfs` / `bfs`.
    #[error("unknown strategy {0:?}, expected \"dfs\" or \"bfs\"")]
    Strategy(String),
}
