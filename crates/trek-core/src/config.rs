/// Tuning knobs shared by the state-space engines.
///
/// The default runs unbounded with strict-improvement hill climbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop with [`Termination::BudgetExceeded`](crate::Termination::BudgetExceeded)
    /// once this many states have been expanded.
    pub max_expansions: Option<usize>,
    /// Let hill climbing accept a neighbour whose heuristic ties the
    /// current one.
    pub allow_plateau: bool,
}

impl SearchConfig {
    /// Unbounded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of expansions.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Enable or disable plateau moves for hill climbing.
    pub fn with_plateau(mut self, allow: bool) -> Self {
        self.allow_plateau = allow;
        self
    }

    /// Whether `expanded` expansions already use up the budget.
    #[inline]
    pub fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let c = SearchConfig::default();
        assert!(!c.exhausted(usize::MAX - 1));
        assert!(!c.allow_plateau);
    }

    #[test]
    fn budget_counts_from_zero() {
        let c = SearchConfig::new().with_max_expansions(2);
        assert!(!c.exhausted(0));
        assert!(!c.exhausted(1));
        assert!(c.exhausted(2));
    }

    #[test]
    fn zero_budget_expands_nothing() {
        assert!(SearchConfig::new().with_max_expansions(0).exhausted(0));
    }
}
