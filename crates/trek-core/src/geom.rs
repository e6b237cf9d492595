//! Grid geometry: [`Cell`] positions and [`Dims`] rectangles.
//!
//! Board-shaped domains (sliding puzzles, tic-tac-toe) address squares by
//! `(row, col)` with row 0 at the top. Row-major order is the scan order
//! used for every deterministic tie-break in the workspace.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A square on a board, addressed by row then column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// The extent of a board: `rows` × `cols` cells starting at `(0, 0)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A square board of side `n`.
    #[inline]
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the board has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies on the board.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if off the board.
    #[inline]
    pub fn idx(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row * self.cols + c.col)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        Cell::new(idx / self.cols, idx % self.cols)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.len()).map(move |i| self.cell(i))
    }

    /// Append the on-board orthogonal neighbours of `c` into `buf`, in the
    /// order up, down, left, right. The caller clears `buf`.
    pub fn cardinal(self, c: Cell, buf: &mut Vec<Cell>) {
        if c.row > 0 {
            buf.push(Cell::new(c.row - 1, c.col));
        }
        if c.row + 1 < self.rows {
            buf.push(Cell::new(c.row + 1, c.col));
        }
        if c.col > 0 {
            buf.push(Cell::new(c.row, c.col - 1));
        }
        if c.col + 1 < self.cols {
            buf.push(Cell::new(c.row, c.col + 1));
        }
    }
}
