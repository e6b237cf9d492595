//! Brute-force tour enumeration.

use itertools::Itertools;
use trek_core::{Cost, SearchConfig, SearchResult, Termination};

use crate::matrix::CostMatrix;

/// Find a minimum-cost closed tour from `start` by scoring every ordering
/// of the other cities. Each complete tour scored counts as one expansion.
///
/// Orderings are generated lexicographically by index, so ties resolve to
/// the same tour [`depth_first`](crate::depth_first) picks.
pub fn permutations(
    matrix: &CostMatrix,
    start: usize,
    config: &SearchConfig,
) -> SearchResult<usize> {
    let n = matrix.len();
    debug_assert!(start < n);
    log::debug!("tsp permutations over {n} cities from {start}");

    let mut best: Option<(Cost, Vec<usize>)> = None;
    let mut expanded = 0;
    let mut tour = Vec::with_capacity(n + 1);

    for order in (0..n).filter(|&c| c != start).permutations(n - 1) {
        if config.exhausted(expanded) {
            log::warn!("tsp permutations budget exhausted after {expanded} tours");
            return SearchResult::failed(Termination::BudgetExceeded, expanded);
        }
        expanded += 1;

        tour.clear();
        tour.push(start);
        tour.extend(order);
        tour.push(start);
        let cost = matrix.walk_cost(&tour);
        if best.as_ref().is_none_or(|(b, _)| cost < *b) {
            best = Some((cost, tour.clone()));
        }
    }

    match best {
        Some((cost, tour)) => SearchResult::found(tour, cost, expanded),
        None => SearchResult::failed(Termination::Exhausted, expanded),
    }
}
