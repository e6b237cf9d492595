use trek_core::{Cost, HeuristicDomain, InputError, SearchResult, Termination};

use crate::Searcher;
use crate::visited::{NO_PARENT, Visited};

impl Searcher {
    /// Run steepest-ascent hill climbing from `start`.
    ///
    /// Each step moves to the unvisited successor with the lowest heuristic,
    /// first in successor order on ties, provided it strictly improves on
    /// the current state (or ties it, when plateau moves are allowed). A
    /// goal successor is taken regardless of its heuristic. Otherwise the
    /// climb stops on a local optimum, which may well not be the goal.
    ///
    /// The result always carries the traversed path; `cost` is set only
    /// when the goal was reached. Fails only when the domain rejects
    /// `start`.
    pub fn hill_climb<D: HeuristicDomain>(
        &self,
        domain: &D,
        start: &D::State,
    ) -> Result<SearchResult<D::State>, InputError> {
        domain.check_start(start)?;
        log::debug!(
            "hill climbing started (plateau moves {})",
            if self.config.allow_plateau { "on" } else { "off" }
        );

        let mut visited: Visited<D::Key, D::State> = Visited::new();
        let mut ci = visited.insert(domain.canonical_key(start), start.clone(), NO_PARENT);
        if domain.is_goal(start) {
            return Ok(SearchResult::found(visited.path(ci), 0, 0));
        }

        let mut current_h = domain.heuristic(start);
        let mut g: Cost = 0;
        let mut steps = 0usize;
        let mut succ: Vec<(D::State, Cost)> = Vec::new();

        loop {
            if self.config.exhausted(steps) {
                log::warn!("hill climbing stopped after {steps} steps");
                return Ok(SearchResult::stopped(
                    visited.path(ci),
                    Termination::BudgetExceeded,
                    steps,
                ));
            }
            steps += 1;

            succ.clear();
            domain.successors(visited.state(ci), &mut succ);

            let mut best: Option<(usize, Cost)> = None;
            for (i, (next, _)) in succ.iter().enumerate() {
                if visited.contains(&domain.canonical_key(next)) {
                    continue;
                }
                let h = domain.heuristic(next);
                if best.is_none_or(|(_, bh)| h < bh) {
                    best = Some((i, h));
                }
            }

            let Some((bi, best_h)) = best else {
                log::debug!("hill climbing stuck: every neighbour already visited");
                return Ok(SearchResult::stopped(
                    visited.path(ci),
                    Termination::LocalOptimum,
                    steps,
                ));
            };

            let (next, step) = succ.swap_remove(bi);
            let goal = domain.is_goal(&next);
            let accept = goal
                || best_h < current_h
                || (self.config.allow_plateau && best_h == current_h);
            if !accept {
                log::debug!("hill climbing reached a local optimum at h = {current_h}");
                return Ok(SearchResult::stopped(
                    visited.path(ci),
                    Termination::LocalOptimum,
                    steps,
                ));
            }

            ci = visited.insert(domain.canonical_key(&next), next, ci);
            g += step;
            current_h = best_h;

            if goal {
                log::debug!("hill climbing reached the goal: cost {g}, {steps} steps");
                return Ok(SearchResult::found(visited.path(ci), g, steps));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_first::Blend;
    use crate::test_graphs::{Line, Terrain};
    use trek_core::SearchConfig;
    use trek_domains::{JugGoal, Levels, WaterJug};

    #[test]
    fn climbs_monotone_line() {
        let line = Line { len: 6, goal: 4 };
        let r = Searcher::default().hill_climb(&line, &0).unwrap();
        assert!(r.success());
        assert_eq!(r.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(r.cost, Some(4));
    }

    #[test]
    fn start_is_goal() {
        let line = Line { len: 3, goal: 1 };
        let r = Searcher::default().hill_climb(&line, &1).unwrap();
        assert!(r.success());
        assert_eq!(r.path, vec![1]);
    }

    #[test]
    fn stops_on_plateau() {
        let t = Terrain {
            h: vec![3, 2, 2, 1, 0],
            goal: 4,
        };
        let r = Searcher::default().hill_climb(&t, &0).unwrap();
        assert_eq!(r.termination, Termination::LocalOptimum);
        assert_eq!(r.path, vec![0, 1]);
        assert_eq!(r.cost, None);
    }

    #[test]
    fn plateau_mode_crosses_ties() {
        let t = Terrain {
            h: vec![3, 2, 2, 1, 0],
            goal: 4,
        };
        let searcher = Searcher::new(SearchConfig::new().with_plateau(true));
        let r = searcher.hill_climb(&t, &0).unwrap();
        assert!(r.success());
        assert_eq!(r.path, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn goal_accepted_without_improvement() {
        let t = Terrain {
            h: vec![1, 5],
            goal: 1,
        };
        let r = Searcher::default().hill_climb(&t, &0).unwrap();
        assert!(r.success());
        assert_eq!(r.path, vec![0, 1]);
    }

    #[test]
    fn never_revisits() {
        // Plateau everywhere: the climb walks right until it runs out of
        // unvisited neighbours instead of bouncing back.
        let t = Terrain {
            h: vec![2, 2, 2, 2],
            goal: 99,
        };
        let searcher = Searcher::new(SearchConfig::new().with_plateau(true));
        let r = searcher.hill_climb(&t, &0).unwrap();
        assert_eq!(r.termination, Termination::LocalOptimum);
        assert_eq!(r.path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn water_jug_local_optimum_where_astar_succeeds() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let searcher = Searcher::default();

        let hill = searcher.hill_climb(&jug, &Levels(0, 0)).unwrap();
        assert!(!hill.success());
        assert_eq!(hill.termination, Termination::LocalOptimum);
        assert_eq!(hill.path, vec![Levels(0, 0), Levels(0, 3)]);

        let astar = searcher.best_first(&jug, &Levels(0, 0), Blend::AStar).unwrap();
        assert!(astar.success());
    }

    #[test]
    fn water_jug_plateau_path() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let searcher = Searcher::new(SearchConfig::new().with_plateau(true));
        let r = searcher.hill_climb(&jug, &Levels(0, 0)).unwrap();
        assert!(!r.success());
        assert_eq!(r.path, vec![Levels(0, 0), Levels(0, 3), Levels(4, 3)]);
    }

    #[test]
    fn budget_keeps_partial_path() {
        let line = Line { len: 10, goal: 9 };
        let searcher = Searcher::new(SearchConfig::new().with_max_expansions(2));
        let r = searcher.hill_climb(&line, &0).unwrap();
        assert_eq!(r.termination, Termination::BudgetExceeded);
        assert_eq!(r.path, vec![0, 1, 2]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let t = Terrain {
            h: vec![4, 3, 3, 2, 3, 1, 0],
            goal: 6,
        };
        for plateau in [false, true] {
            let searcher = Searcher::new(SearchConfig::new().with_plateau(plateau));
            let a = searcher.hill_climb(&jug, &Levels(0, 0)).unwrap();
            let b = searcher.hill_climb(&jug, &Levels(0, 0)).unwrap();
            assert_eq!(a, b);
            let a = searcher.hill_climb(&t, &0).unwrap();
            let b = searcher.hill_climb(&t, &0).unwrap();
            assert_eq!(a, b);
        }
    }
}
