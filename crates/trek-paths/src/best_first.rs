//! A* and greedy best-first search as one parameterised algorithm.
//!
//! Frontier entries are ranked by `alpha * g + h`, where `g` is the cost
//! accumulated so far and `h` the domain heuristic. With `alpha = 1` this is
//! A*; with `alpha = 0` it is greedy best-first search.

use trek_core::{Cost, HeuristicDomain, InputError, SearchResult, Termination};

use crate::Searcher;
use crate::frontier::Frontier;
use crate::visited::{NO_PARENT, Visited};

/// Weight of the accumulated cost in the frontier priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Blend {
    /// `alpha = 0`: rank by heuristic alone. Fast, not optimal.
    Greedy,
    /// `alpha = 1`: rank by cost plus heuristic. Optimal when the heuristic
    /// is admissible.
    #[default]
    AStar,
}

impl Blend {
    /// Numeric weight applied to the accumulated cost.
    #[inline]
    pub fn alpha(self) -> Cost {
        match self {
            Self::Greedy => 0,
            Self::AStar => 1,
        }
    }

    /// Parse a numeric blend; only 0 and 1 are meaningful.
    pub fn from_alpha(alpha: u8) -> Result<Self, InputError> {
        match alpha {
            0 => Ok(Self::Greedy),
            1 => Ok(Self::AStar),
            other => Err(InputError::Alpha(other)),
        }
    }

    #[inline]
    fn priority(self, g: Cost, h: Cost) -> Cost {
        self.alpha() * g + h
    }
}

impl TryFrom<u8> for Blend {
    type Error = InputError;

    fn try_from(alpha: u8) -> Result<Self, Self::Error> {
        Self::from_alpha(alpha)
    }
}

/// A discovered state waiting in the frontier, with the node it was
/// reached from.
struct Pending<K, S> {
    key: K,
    state: S,
    parent: usize,
}

impl Searcher {
    /// Run best-first search from `start`.
    ///
    /// A state's parent is fixed the first time the state is expanded and
    /// is never replaced afterwards; stale frontier entries for already
    /// expanded states are skipped on pop. The reported cost is the sum of
    /// step costs along the returned path.
    ///
    /// Fails only when the domain rejects `start`.
    pub fn best_first<D: HeuristicDomain>(
        &self,
        domain: &D,
        start: &D::State,
        blend: Blend,
    ) -> Result<SearchResult<D::State>, InputError> {
        domain.check_start(start)?;
        let mut frontier: Frontier<Pending<D::Key, D::State>> = Frontier::new();
        let mut visited: Visited<D::Key, D::State> = Visited::new();
        let mut succ: Vec<(D::State, Cost)> = Vec::new();
        let mut expanded = 0usize;

        log::debug!("best-first search started ({blend:?})");

        frontier.push(
            Pending {
                key: domain.canonical_key(start),
                state: start.clone(),
                parent: NO_PARENT,
            },
            blend.priority(0, domain.heuristic(start)),
            0,
        );

        while let Some((pending, g)) = frontier.pop() {
            // Skip stale entries.
            if visited.contains(&pending.key) {
                continue;
            }
            if self.config.exhausted(expanded) {
                log::warn!("best-first search stopped after {expanded} expansions");
                return Ok(SearchResult::failed(Termination::BudgetExceeded, expanded));
            }

            let Pending { key, state, parent } = pending;
            let ci = visited.insert(key, state, parent);
            expanded += 1;

            let current = visited.state(ci);
            if domain.is_goal(current) {
                let path = visited.path(ci);
                log::debug!(
                    "best-first search reached the goal: cost {g}, {expanded} expansions"
                );
                return Ok(SearchResult::found(path, g, expanded));
            }
            log::trace!("expanding node {ci} at cost {g}");

            succ.clear();
            domain.successors(current, &mut succ);

            for (next, step) in succ.drain(..) {
                let key = domain.canonical_key(&next);
                if visited.contains(&key) {
                    continue;
                }
                let ng = g + step;
                let priority = blend.priority(ng, domain.heuristic(&next));
                frontier.push(
                    Pending {
                        key,
                        state: next,
                        parent: ci,
                    },
                    priority,
                    ng,
                );
            }
        }

        log::debug!("best-first search exhausted {expanded} states without a goal");
        Ok(SearchResult::failed(Termination::Exhausted, expanded))
    }
}
