//! State-space search engines over [`trek_core`] domains.
//!
//! - **Best-first** search, A* or greedy ([`Searcher::best_first`])
//! - **Breadth-first** search ([`Searcher::breadth_first`])
//! - **Hill climbing** local search ([`Searcher::hill_climb`])
//!
//! All engines run through [`Searcher`], which carries a
//! [`SearchConfig`](trek_core::SearchConfig). Each call owns its frontier and
//! visited set; nothing is shared between calls.
//!
//! Every engine is deterministic: ties are broken by discovery order, never
//! by hashing or by comparing states.

mod best_first;
mod bfs;
mod frontier;
mod hill_climb;
mod searcher;
mod visited;

pub use best_first::Blend;
pub use frontier::Frontier;
pub use searcher::Searcher;

use trek_core::{HeuristicDomain, InputError, SearchResult};

/// Run best-first search with a numeric blend (`0` greedy, `1` A*) and the
/// default configuration.
///
/// Fails on an unknown blend or a start the domain rejects.
pub fn run_best_first<D: HeuristicDomain>(
    domain: &D,
    start: &D::State,
    alpha: u8,
) -> Result<SearchResult<D::State>, InputError> {
    let blend = Blend::from_alpha(alpha)?;
    Searcher::default().best_first(domain, start, blend)
}

/// Run strict-improvement hill climbing with the default configuration.
pub fn run_hill_climb<D: HeuristicDomain>(
    domain: &D,
    start: &D::State,
) -> Result<SearchResult<D::State>, InputError> {
    Searcher::default().hill_climb(domain, start)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graphs::Line;
    use trek_domains::{Board, JugGoal, Levels, SlidingPuzzle, WaterJug};

    #[test]
    fn run_best_first_rejects_bad_alpha() {
        let line = Line { len: 3, goal: 2 };
        assert_eq!(
            run_best_first(&line, &0, 5).unwrap_err(),
            InputError::Alpha(5)
        );
        assert!(run_best_first(&line, &0, 0).unwrap().success());
    }

    #[test]
    fn run_hill_climb_uses_strict_mode() {
        let line = Line { len: 3, goal: 2 };
        let r = run_hill_climb(&line, &0).unwrap();
        assert_eq!(r.path, vec![0, 1, 2]);
    }

    #[test]
    fn overfilled_jug_start_is_rejected() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let start = Levels(5, 0);
        let err = InputError::StartState(5, 0);
        assert_eq!(run_best_first(&jug, &start, 1).unwrap_err(), err);
        assert_eq!(run_hill_climb(&jug, &start).unwrap_err(), err);
        assert_eq!(
            Searcher::default().breadth_first(&jug, &start).unwrap_err(),
            err
        );
    }

    #[test]
    fn puzzle_size_mismatch_is_rejected() {
        let goal = Board::from_rows(&[[1u16, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        let start = Board::from_rows(&[
            [1u16, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 0, 15],
        ])
        .unwrap();
        let puzzle = SlidingPuzzle::new(goal);
        let err = InputError::SizeMismatch { start: 4, goal: 3 };
        assert_eq!(run_best_first(&puzzle, &start, 1).unwrap_err(), err);
        assert_eq!(run_best_first(&puzzle, &start, 0).unwrap_err(), err);
        assert_eq!(run_hill_climb(&puzzle, &start).unwrap_err(), err);
    }
}
