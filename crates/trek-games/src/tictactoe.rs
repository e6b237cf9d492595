//! Tic-tac-toe on the classic 3×3 board.

use std::fmt;
use std::str::FromStr;

use trek_core::{Cell, Dims, InputError};

use crate::game::{Game, Score};

const SIDE: usize = 3;

const DIMS: Dims = Dims::square(SIDE);

/// Rows, columns and both diagonals, as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            _ => Err(InputError::Player(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mark {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Mark> for String {
    fn from(m: Mark) -> Self {
        m.as_str().to_string()
    }
}

/// A 3×3 board. Boards are values: [`place`](TicTacToe::place) returns a
/// new board and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")
)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
}

impl TicTacToe {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from three rows of three tokens: `"X"`, `"O"`, or an
    /// empty (or blank) string for a free square.
    ///
    /// Mark counts are not checked, so any reachable or unreachable
    /// arrangement is accepted.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self, InputError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() != SIDE {
            return Err(InputError::GridShape {
                row: rows.len().min(SIDE),
                width: 0,
                expected: SIDE,
            });
        }
        let mut cells = [None; 9];
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != SIDE {
                return Err(InputError::GridShape {
                    row,
                    width: r.len(),
                    expected: SIDE,
                });
            }
            for (col, token) in r.iter().enumerate() {
                let token = token.as_ref().trim();
                if !token.is_empty() {
                    cells[row * SIDE + col] = Some(token.parse()?);
                }
            }
        }
        Ok(Self { cells })
    }

    /// Board dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        DIMS
    }

    /// Mark at `c`; `None` when free or off the board.
    pub fn get(&self, c: Cell) -> Option<Mark> {
        DIMS.idx(c).and_then(|i| self.cells[i])
    }

    /// A new board with `mark` placed at `c`.
    ///
    /// Does not check turn order or whether the game is over; see
    /// [`play`](crate::play) for a checked move.
    pub fn place(&self, c: Cell, mark: Mark) -> Result<TicTacToe, InputError> {
        let i = DIMS.idx(c).ok_or(InputError::OutOfBounds(c))?;
        if self.cells[i].is_some() {
            return Err(InputError::Occupied(c));
        }
        let mut next = self.clone();
        next.cells[i] = Some(mark);
        Ok(next)
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(m) if self.cells[b] == Some(m) && self.cells[c] == Some(m) => Some(m),
            _ => None,
        })
    }

    /// Whether every square is taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Whether play has ended, by a win or a draw.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Free squares in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        DIMS.cells().filter(|&c| self.get(c).is_none())
    }

    /// The board as rows of `"X"`, `"O"` and `""` tokens.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(SIDE)
            .map(|r| {
                r.iter()
                    .map(|m| m.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for TicTacToe {
    type Error = InputError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        TicTacToe::from_rows(&rows)
    }
}

impl From<TicTacToe> for Vec<Vec<String>> {
    fn from(b: TicTacToe) -> Self {
        b.rows()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for m in row {
                match m {
                    Some(m) => write!(f, "{m}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

/// A board together with the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: TicTacToe,
    pub to_move: Mark,
}

impl Position {
    pub fn new(board: TicTacToe, to_move: Mark) -> Self {
        Self { board, to_move }
    }
}

/// Tic-tac-toe scored for one player: `+1` when `max` wins, `-1` when the
/// opponent wins, `0` for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGame {
    max: Mark,
}

impl TicTacToeGame {
    pub fn new(max: Mark) -> Self {
        Self { max }
    }

    /// The maximizing player.
    #[inline]
    pub fn max(&self) -> Mark {
        self.max
    }
}

impl Game for TicTacToeGame {
    type State = Position;
    type Move = Cell;

    fn terminal(&self, pos: &Position) -> Option<Score> {
        match pos.board.winner() {
            Some(m) if m == self.max => Some(1),
            Some(_) => Some(-1),
            None if pos.board.is_full() => Some(0),
            None => None,
        }
    }

    fn moves(&self, pos: &Position, buf: &mut Vec<Cell>) {
        buf.extend(pos.board.empty_cells());
    }

    fn play(&self, pos: &Position, mv: Cell) -> Position {
        let mut board = pos.board.clone();
        if let Some(i) = DIMS.idx(mv) {
            debug_assert!(board.cells[i].is_none());
            board.cells[i] = Some(pos.to_move);
        }
        Position::new(board, pos.to_move.opponent())
    }
}
