use std::hash::Hash;

use crate::{Cost, InputError};

/// Minimal search interface: transitions, goal test and deduplication key.
///
/// Implementations must be pure. Calling any method twice with the same
/// state yields the same answer, and successor order is part of that
/// contract because engines break ties by discovery order.
pub trait Domain {
    /// A configuration of the problem. Engines never mutate a state in
    /// place; transitions always build new values.
    type State: Clone;

    /// Canonical form of a state. Two semantically equal states must map
    /// to equal keys.
    type Key: Eq + Hash + Clone;

    /// Append the successors of `state` and their step costs into `buf`.
    /// The caller clears `buf` before calling.
    ///
    /// `state` itself must not appear among its successors.
    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, Cost)>);

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Canonical key used by visited sets.
    fn canonical_key(&self, state: &Self::State) -> Self::Key;

    /// Reject a start state this domain cannot search from.
    ///
    /// Engines call this once before searching, so `successors` and the
    /// heuristic may assume every state they see is well formed.
    fn check_start(&self, _start: &Self::State) -> Result<(), InputError> {
        Ok(())
    }
}

/// Domain with a remaining-cost estimate.
pub trait HeuristicDomain: Domain {
    /// Estimated cost from `state` to the nearest goal.
    ///
    /// Best-first search with a blend of 1 (A*) returns optimal paths only
    /// when this never overestimates the true remaining cost. Greedy search
    /// and hill climbing run with any estimate.
    fn heuristic(&self, state: &Self::State) -> Cost;
}
