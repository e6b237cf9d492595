use crate::Cost;

/// Why a search call returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// A goal state was reached.
    Goal,
    /// Every reachable state was expanded without meeting the goal.
    Exhausted,
    /// Local search stopped on a state with no acceptable neighbour.
    LocalOptimum,
    /// The configured expansion budget ran out first.
    BudgetExceeded,
}

impl Termination {
    /// Whether this termination counts as success.
    #[inline]
    pub fn is_success(self) -> bool {
        self == Self::Goal
    }
}

/// The outcome of one engine call.
///
/// For global searches `path` is empty unless the goal was reached. Local
/// search keeps the states it traversed even when it stops short of the
/// goal, so callers can show how far it got. `cost` is set only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S> {
    pub path: Vec<S>,
    pub cost: Option<Cost>,
    pub termination: Termination,
    /// Number of states expanded (or, for local search, steps evaluated).
    pub expanded: usize,
}

impl<S> SearchResult<S> {
    /// A successful result ending at the last state of `path`.
    pub fn found(path: Vec<S>, cost: Cost, expanded: usize) -> Self {
        Self {
            path,
            cost: Some(cost),
            termination: Termination::Goal,
            expanded,
        }
    }

    /// A negative result with an empty path.
    pub fn failed(termination: Termination, expanded: usize) -> Self {
        debug_assert!(!termination.is_success());
        Self {
            path: Vec::new(),
            cost: None,
            termination,
            expanded,
        }
    }

    /// A negative result that still reports the states traversed.
    pub fn stopped(path: Vec<S>, termination: Termination, expanded: usize) -> Self {
        debug_assert!(!termination.is_success());
        Self {
            path,
            cost: None,
            termination,
            expanded,
        }
    }

    /// Whether the goal was reached.
    #[inline]
    pub fn success(&self) -> bool {
        self.termination.is_success()
    }

    /// Number of transitions on the path (zero for an empty path).
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The final state of the path, if any.
    pub fn last(&self) -> Option<&S> {
        self.path.last()
    }

    /// Convert every state on the path, keeping the rest of the result.
    pub fn map<T>(self, f: impl FnMut(S) -> T) -> SearchResult<T> {
        SearchResult {
            path: self.path.into_iter().map(f).collect(),
            cost: self.cost,
            termination: self.termination,
            expanded: self.expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_is_success() {
        let r = SearchResult::found(vec![1, 2, 3], 2, 3);
        assert!(r.success());
        assert_eq!(r.steps(), 2);
        assert_eq!(r.last(), Some(&3));
        assert_eq!(r.cost, Some(2));
    }

    #[test]
    fn failures_are_uniform() {
        let unreachable = SearchResult::<u8>::failed(Termination::Exhausted, 10);
        let budget = SearchResult::<u8>::failed(Termination::BudgetExceeded, 10);
        for r in [unreachable, budget] {
            assert!(!r.success());
            assert!(r.path.is_empty());
            assert_eq!(r.cost, None);
        }
    }

    #[test]
    fn stopped_keeps_path() {
        let r = SearchResult::stopped(vec!['a', 'b'], Termination::LocalOptimum, 1);
        assert!(!r.success());
        assert_eq!(r.path, vec!['a', 'b']);
        assert_eq!(r.steps(), 1);
    }

    #[test]
    fn map_preserves_metadata() {
        let r = SearchResult::found(vec![1u8, 2], 5, 7).map(|s| s as u32 * 10);
        assert_eq!(r.path, vec![10, 20]);
        assert_eq!(r.cost, Some(5));
        assert_eq!(r.expanded, 7);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn termination_is_snake_case() {
        let json = serde_json::to_string(&Termination::BudgetExceeded).unwrap();
        assert_eq!(json, "\"budget_exceeded\"");
    }

    #[test]
    fn result_round_trip() {
        let r = SearchResult::found(vec![(0u32, 0u32), (4, 0)], 1, 2);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult<(u32, u32)> = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
