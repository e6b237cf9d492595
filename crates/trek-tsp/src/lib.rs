//! Exact traveling-salesman search.
//!
//! Two exhaustive strategies solve the same [`CostMatrix`]:
//!
//! - [`depth_first`] extends partial tours recursively and compares them
//!   once closed
//! - [`permutations`] scores every ordering of the non-start cities
//!
//! Neither bounds partial tours, so both visit every tour; they exist side
//! by side so each can check the other. Both are exponential in the number
//! of cities; pass a [`SearchConfig`] budget for anything past a dozen.

mod dfs;
mod matrix;
mod permutations;

pub use dfs::depth_first;
pub use matrix::{CostMatrix, NestedCosts};
pub use permutations::permutations;

use std::fmt;
use std::str::FromStr;

use trek_core::{InputError, SearchConfig, SearchResult};

/// Which exhaustive strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TspStrategy {
    /// Recursive depth-first extension.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
    /// Enumerate every permutation. Named `"bfs"` on the wire.
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Permutations,
}

impl TspStrategy {
    fn as_str(self) -> &'static str {
        match self {
            TspStrategy::DepthFirst => "dfs",
            TspStrategy::Permutations => "bfs",
        }
    }
}

impl fmt::Display for TspStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TspStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(TspStrategy::DepthFirst),
            "bfs" => Ok(TspStrategy::Permutations),
            _ => Err(InputError::Strategy(s.to_string())),
        }
    }
}

/// Solve `matrix` from the city named `start` under `config`.
///
/// The tour is reported as city identifiers and starts and ends at
/// `start`.
pub fn solve(
    matrix: &CostMatrix,
    start: &str,
    strategy: TspStrategy,
    config: &SearchConfig,
) -> Result<SearchResult<String>, InputError> {
    let start = matrix.index(start)?;
    let r = match strategy {
        TspStrategy::DepthFirst => depth_first(matrix, start, config),
        TspStrategy::Permutations => permutations(matrix, start, config),
    };
    Ok(r.map(|i| matrix.cities()[i].clone()))
}

/// Solve `matrix` from `start` without a budget.
pub fn run_tsp_exact(
    matrix: &CostMatrix,
    start: &str,
    strategy: TspStrategy,
) -> Result<SearchResult<String>, InputError> {
    solve(matrix, start, strategy, &SearchConfig::default())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_wire_names() {
        assert_eq!(
            serde_json::to_string(&TspStrategy::Permutations).unwrap(),
            "\"bfs\""
        );
        let s: TspStrategy = serde_json::from_str("\"dfs\"").unwrap();
        assert_eq!(s, TspStrategy::DepthFirst);
    }
}
