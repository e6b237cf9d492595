//! Domain adapters for the *trek* search engines.
//!
//! - [`SlidingPuzzle`]: n×n sliding-tile puzzles (the 8-puzzle for n = 3),
//!   with a Manhattan-distance heuristic.
//! - [`WaterJug`]: the two-jug measuring puzzle, with a level-distance
//!   heuristic.
//!
//! Both validate their inputs on construction and are pure afterwards, so
//! they can be shared between threads and searched any number of times.

mod puzzle;
mod water_jug;

pub use puzzle::{Board, SlidingPuzzle, is_solvable};
pub use water_jug::{JugGoal, Levels, WaterJug};
