//! Exhaustive depth-first tour search.
//!
//! Partial tours are extended city by city in index order and compared only
//! once closed. There is no bound on partial cost, so every tour is visited.

use trek_core::{Cost, SearchConfig, SearchResult, Termination};

use crate::matrix::CostMatrix;

struct Walk<'a> {
    matrix: &'a CostMatrix,
    config: &'a SearchConfig,
    start: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
    best: Option<(Cost, Vec<usize>)>,
    expanded: usize,
}

struct OutOfBudget;

impl Walk<'_> {
    fn extend(&mut self, cost: Cost) -> Result<(), OutOfBudget> {
        if self.config.exhausted(self.expanded) {
            return Err(OutOfBudget);
        }
        self.expanded += 1;

        let n = self.matrix.len();
        let Some(&last) = self.path.last() else {
            return Ok(());
        };

        if self.path.len() == n {
            let total = cost.saturating_add(self.matrix.cost(last, self.start));
            // Strict: the first tour found keeps ties.
            if self.best.as_ref().is_none_or(|(b, _)| total < *b) {
                let mut tour = self.path.clone();
                tour.push(self.start);
                log::trace!("new best tour {tour:?} costing {total}");
                self.best = Some((total, tour));
            }
            return Ok(());
        }

        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            let step = cost.saturating_add(self.matrix.cost(last, next));
            let r = self.extend(step);
            self.path.pop();
            self.visited[next] = false;
            r?;
        }
        Ok(())
    }
}

/// Find a minimum-cost closed tour from `start` by exhaustive depth-first
/// search. Each partial tour extended counts as one expansion.
pub fn depth_first(
    matrix: &CostMatrix,
    start: usize,
    config: &SearchConfig,
) -> SearchResult<usize> {
    let n = matrix.len();
    debug_assert!(start < n);
    log::debug!("tsp dfs over {n} cities from {start}");

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut walk = Walk {
        matrix,
        config,
        start,
        visited,
        path: vec![start],
        best: None,
        expanded: 0,
    };

    if walk.extend(0).is_err() {
        log::warn!("tsp dfs budget exhausted after {} expansions", walk.expanded);
        return SearchResult::failed(Termination::BudgetExceeded, walk.expanded);
    }
    match walk.best {
        Some((cost, tour)) => SearchResult::found(tour, cost, walk.expanded),
        None => SearchResult::failed(Termination::Exhausted, walk.expanded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::tests::nested;

    fn matrix(table: &[&[Cost]]) -> CostMatrix {
        CostMatrix::from_nested(&nested(table)).unwrap()
    }

    #[test]
    fn four_cities() {
        let m = matrix(&[
            &[0, 10, 15, 20],
            &[10, 0, 35, 25],
            &[15, 35, 0, 30],
            &[20, 25, 30, 0],
        ]);
        let r = depth_first(&m, 0, &SearchConfig::default());
        assert_eq!(r.cost, Some(80));
        assert_eq!(r.path, vec![0, 1, 3, 2, 0]);
        // 1 + 3 + 6 + 6 partial tours
        assert_eq!(r.expanded, 16);
    }

    #[test]
    fn asymmetric() {
        let m = matrix(&[&[0, 1, 9], &[5, 0, 1], &[1, 7, 0]]);
        let r = depth_first(&m, 1, &SearchConfig::default());
        assert_eq!(r.cost, Some(3));
        assert_eq!(r.path, vec![1, 2, 0, 1]);
    }

    #[test]
    fn single_city() {
        let m = matrix(&[&[0]]);
        let r = depth_first(&m, 0, &SearchConfig::default());
        assert_eq!(r.path, vec![0, 0]);
        assert_eq!(r.cost, Some(0));
    }

    #[test]
    fn budget() {
        let m = matrix(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
        let r = depth_first(&m, 0, &SearchConfig::new().with_max_expansions(2));
        assert_eq!(r.termination, Termination::BudgetExceeded);
        assert!(r.path.is_empty());
        assert_eq!(r.expanded, 2);
    }
}
