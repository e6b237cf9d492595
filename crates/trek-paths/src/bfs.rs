use std::collections::VecDeque;

use trek_core::{Cost, Domain, InputError, SearchResult, Termination};

use crate::Searcher;
use crate::visited::{NO_PARENT, Visited};

impl Searcher {
    /// Run breadth-first search from `start`.
    ///
    /// States are goal-tested when first generated, so the returned path
    /// has the fewest transitions. With unit step costs that is also the
    /// cheapest path, which makes this the exhaustive reference for A*.
    /// The reported cost sums the step costs along the path.
    pub fn breadth_first<D: Domain>(
        &self,
        domain: &D,
        start: &D::State,
    ) -> Result<SearchResult<D::State>, InputError> {
        domain.check_start(start)?;
        log::debug!("breadth-first search started");

        let mut visited: Visited<D::Key, D::State> = Visited::new();
        let root = visited.insert(domain.canonical_key(start), start.clone(), NO_PARENT);
        if domain.is_goal(start) {
            return Ok(SearchResult::found(visited.path(root), 0, 0));
        }

        let mut queue: VecDeque<(usize, Cost)> = VecDeque::new();
        queue.push_back((root, 0));
        let mut succ: Vec<(D::State, Cost)> = Vec::new();
        let mut expanded = 0usize;

        while let Some((ci, g)) = queue.pop_front() {
            if self.config.exhausted(expanded) {
                log::warn!("breadth-first search stopped after {expanded} expansions");
                return Ok(SearchResult::failed(Termination::BudgetExceeded, expanded));
            }
            expanded += 1;

            succ.clear();
            domain.successors(visited.state(ci), &mut succ);

            for (next, step) in succ.drain(..) {
                let key = domain.canonical_key(&next);
                if visited.contains(&key) {
                    continue;
                }
                let ng = g + step;
                let goal = domain.is_goal(&next);
                let ni = visited.insert(key, next, ci);
                if goal {
                    log::debug!(
                        "breadth-first search reached the goal: cost {ng}, {expanded} expansions"
                    );
                    return Ok(SearchResult::found(visited.path(ni), ng, expanded));
                }
                queue.push_back((ni, ng));
            }
        }

        log::debug!(
            "breadth-first search exhausted {} states without a goal",
            visited.len()
        );
        Ok(SearchResult::failed(Termination::Exhausted, expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graphs::Line;
    use trek_core::SearchConfig;
    use trek_domains::{JugGoal, Levels, WaterJug};

    #[test]
    fn shortest_on_line() {
        let line = Line { len: 5, goal: 4 };
        let r = Searcher::default().breadth_first(&line, &0).unwrap();
        assert!(r.success());
        assert_eq!(r.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(r.cost, Some(4));
    }

    #[test]
    fn start_is_goal() {
        let line = Line { len: 5, goal: 2 };
        let r = Searcher::default().breadth_first(&line, &2).unwrap();
        assert_eq!(r.path, vec![2]);
        assert_eq!(r.cost, Some(0));
        assert_eq!(r.expanded, 0);
    }

    #[test]
    fn jug_matches_astar_scenario() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let r = Searcher::default().breadth_first(&jug, &Levels(0, 0)).unwrap();
        assert_eq!(r.cost, Some(4));
        assert_eq!(r.last(), Some(&Levels(4, 2)));
    }

    #[test]
    fn unreachable_is_exhausted() {
        let jug = WaterJug::new((2, 4), JugGoal::Either(3)).unwrap();
        let r = Searcher::default().breadth_first(&jug, &Levels(0, 0)).unwrap();
        assert_eq!(r.termination, Termination::Exhausted);
        assert!(r.path.is_empty());
    }

    #[test]
    fn budget() {
        let line = Line { len: 100, goal: 99 };
        let searcher = Searcher::new(SearchConfig::new().with_max_expansions(3));
        let r = searcher.breadth_first(&line, &0).unwrap();
        assert_eq!(r.termination, Termination::BudgetExceeded);
        assert_eq!(r.expanded, 3);
    }
}
