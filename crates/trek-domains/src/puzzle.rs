//! Sliding-tile puzzles on an n×n board.
//!
//! Tile `0` is the blank. A move slides an orthogonal neighbour of the
//! blank into it; successors are generated in the order the blank moves
//! up, down, left, right.

use std::fmt;

use trek_core::{Cell, Cost, Dims, Domain, HeuristicDomain, InputError, manhattan};

/// The blank tile.
pub const BLANK: u16 = 0;

/// An immutable puzzle configuration.
///
/// Tiles are stored row-major, so two boards compare and hash equal exactly
/// when every square holds the same tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<u16>>", into = "Vec<Vec<u16>>")
)]
pub struct Board {
    side: usize,
    tiles: Vec<u16>,
    blank: usize,
}

impl Board {
    /// Build a board from nested rows, validating its shape and tiles.
    ///
    /// The board must be square with side at least 2 and hold each tile
    /// `0..side*side` exactly once.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self, InputError> {
        let side = rows.len();
        if side < 2 {
            return Err(InputError::GridTooSmall(side));
        }
        let mut tiles = Vec::with_capacity(side * side);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != side {
                return Err(InputError::GridShape {
                    row,
                    width: r.len(),
                    expected: side,
                });
            }
            tiles.extend_from_slice(r);
        }

        let tile_set = InputError::TileSet {
            side,
            max: side * side - 1,
        };
        let mut seen = vec![false; side * side];
        for &t in &tiles {
            let Some(slot) = seen.get_mut(t as usize) else {
                return Err(tile_set);
            };
            if *slot {
                return Err(tile_set);
            }
            *slot = true;
        }

        let blank = tiles
            .iter()
            .position(|&t| t == BLANK)
            .ok_or(tile_set)?;
        Ok(Self { side, tiles, blank })
    }

    /// Side length of the board.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Board dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::square(self.side)
    }

    /// Tile at `c`, or `None` if off the board.
    pub fn tile(&self, c: Cell) -> Option<u16> {
        self.dims().idx(c).map(|i| self.tiles[i])
    }

    /// Position of the blank.
    #[inline]
    pub fn blank(&self) -> Cell {
        self.dims().cell(self.blank)
    }

    /// Tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// The board as nested rows.
    pub fn rows(&self) -> Vec<Vec<u16>> {
        self.tiles.chunks(self.side).map(|r| r.to_vec()).collect()
    }

    /// A new board with the tile at `from` slid into the blank, or `None`
    /// unless `from` is an on-board orthogonal neighbour of the blank.
    pub fn slide(&self, from: Cell) -> Option<Board> {
        let fi = self.dims().idx(from)?;
        if manhattan(from, self.blank()) != 1 {
            return None;
        }
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, fi);
        Some(Board {
            side: self.side,
            tiles,
            blank: fi,
        })
    }

    /// Number of inversions among the non-blank tiles.
    fn inversions(&self) -> usize {
        let t: Vec<u16> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let mut n = 0;
        for i in 0..t.len() {
            for j in i + 1..t.len() {
                if t[i] > t[j] {
                    n += 1;
                }
            }
        }
        n
    }

    /// Invariant preserved by every move.
    fn parity(&self) -> usize {
        let row_term = if self.side % 2 == 0 { self.blank().row } else { 0 };
        (self.inversions() + row_term) % 2
    }
}

impl TryFrom<Vec<Vec<u16>>> for Board {
    type Error = InputError;

    fn try_from(rows: Vec<Vec<u16>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u16>> {
    fn from(b: Board) -> Self {
        b.rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.side).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, t) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if *t == BLANK {
                    write!(f, ".")?;
                } else {
                    write!(f, "{t}")?;
                }
            }
        }
        Ok(())
    }
}

/// Whether `goal` is reachable from `start`.
///
/// Sliding moves preserve a parity invariant, so exactly half of all
/// arrangements are reachable from any board. Boards of different sizes
/// are never mutually reachable.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    start.side == goal.side && start.parity() == goal.parity()
}

/// Sliding-puzzle domain with an explicit goal board.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    goal: Board,
    /// Goal position of each tile, indexed by tile value.
    targets: Vec<Cell>,
}

impl SlidingPuzzle {
    /// Create a puzzle that searches towards `goal`.
    pub fn new(goal: Board) -> Self {
        let dims = goal.dims();
        let mut targets = vec![Cell::default(); goal.tiles.len()];
        for (i, &t) in goal.tiles.iter().enumerate() {
            targets[t as usize] = dims.cell(i);
        }
        Self { goal, targets }
    }

    /// The goal board.
    #[inline]
    pub fn goal(&self) -> &Board {
        &self.goal
    }
}

impl Domain for SlidingPuzzle {
    type State = Board;
    type Key = Board;

    fn successors(&self, state: &Board, buf: &mut Vec<(Board, Cost)>) {
        let mut cells = Vec::with_capacity(4);
        state.dims().cardinal(state.blank(), &mut cells);
        for c in cells {
            if let Some(next) = state.slide(c) {
                buf.push((next, 1));
            }
        }
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn canonical_key(&self, state: &Board) -> Board {
        state.clone()
    }

    /// The start board must have the goal's side.
    fn check_start(&self, start: &Board) -> Result<(), InputError> {
        if start.side != self.goal.side {
            return Err(InputError::SizeMismatch {
                start: start.side,
                goal: self.goal.side,
            });
        }
        Ok(())
    }
}

impl HeuristicDomain for SlidingPuzzle {
    /// Sum of the Manhattan distances of every tile to its goal square.
    fn heuristic(&self, state: &Board) -> Cost {
        let dims = state.dims();
        state
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != BLANK)
            .map(|(i, &t)| manhattan(dims.cell(i), self.targets[t as usize]))
            .sum()
    }
}
