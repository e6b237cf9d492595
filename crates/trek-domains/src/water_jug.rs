//! The two-jug measuring puzzle.
//!
//! Two unmarked jugs can each be filled, emptied, or poured into the other
//! until one is empty or the other full. Every move costs 1.

use trek_core::{Cost, Domain, HeuristicDomain, InputError};

/// Fill levels of the first and second jug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Levels(pub u32, pub u32);

impl From<(u32, u32)> for Levels {
    fn from((a, b): (u32, u32)) -> Self {
        Self(a, b)
    }
}

impl From<Levels> for (u32, u32) {
    fn from(l: Levels) -> Self {
        (l.0, l.1)
    }
}

/// What counts as solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JugGoal {
    /// Either jug holds the level.
    Either(u32),
    /// The first jug holds the level.
    First(u32),
    /// The second jug holds the level.
    Second(u32),
    /// Both jugs hold exactly these levels.
    Exact(u32, u32),
}

/// Water-jug domain: capacities plus a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterJug {
    capacity: Levels,
    goal: JugGoal,
}

impl WaterJug {
    /// Create a domain, rejecting zero capacities and goals that cannot fit.
    pub fn new(capacities: (u32, u32), goal: JugGoal) -> Result<Self, InputError> {
        let (c1, c2) = capacities;
        if c1 == 0 {
            return Err(InputError::Capacity { jug: 1 });
        }
        if c2 == 0 {
            return Err(InputError::Capacity { jug: 2 });
        }
        let fits = |level: u32, capacity: u32| {
            if level > capacity {
                Err(InputError::GoalLevel { level, capacity })
            } else {
                Ok(())
            }
        };
        match goal {
            JugGoal::Either(l) => fits(l, c1.max(c2))?,
            JugGoal::First(l) => fits(l, c1)?,
            JugGoal::Second(l) => fits(l, c2)?,
            JugGoal::Exact(a, b) => {
                fits(a, c1)?;
                fits(b, c2)?;
            }
        }
        Ok(Self {
            capacity: Levels(c1, c2),
            goal,
        })
    }

    /// Jug capacities.
    #[inline]
    pub fn capacities(&self) -> Levels {
        self.capacity
    }

    /// The goal.
    #[inline]
    pub fn goal(&self) -> JugGoal {
        self.goal
    }
}

impl Domain for WaterJug {
    type State = Levels;
    type Key = Levels;

    /// Successors in the order: fill first, fill second, empty first, empty
    /// second, pour first into second, pour second into first. Moves that
    /// change nothing, and repeats of an earlier move's result, are dropped.
    fn successors(&self, state: &Levels, buf: &mut Vec<(Levels, Cost)>) {
        let Levels(x, y) = *state;
        let Levels(c1, c2) = self.capacity;
        let to_second = x.min(c2 - y);
        let to_first = y.min(c1 - x);
        let moves = [
            Levels(c1, y),
            Levels(x, c2),
            Levels(0, y),
            Levels(x, 0),
            Levels(x - to_second, y + to_second),
            Levels(x + to_first, y - to_first),
        ];
        for next in moves {
            if next == *state || buf.iter().any(|(s, _)| *s == next) {
                continue;
            }
            buf.push((next, 1));
        }
    }

    fn is_goal(&self, state: &Levels) -> bool {
        let Levels(x, y) = *state;
        match self.goal {
            JugGoal::Either(l) => x == l || y == l,
            JugGoal::First(l) => x == l,
            JugGoal::Second(l) => y == l,
            JugGoal::Exact(a, b) => x == a && y == b,
        }
    }

    fn canonical_key(&self, state: &Levels) -> Levels {
        *state
    }

    /// A jug may not start above its capacity.
    fn check_start(&self, start: &Levels) -> Result<(), InputError> {
        if start.0 > self.capacity.0 || start.1 > self.capacity.1 {
            return Err(InputError::StartState(start.0, start.1));
        }
        Ok(())
    }
}

impl HeuristicDomain for WaterJug {
    /// Absolute difference between the constrained level(s) and the goal;
    /// the nearer jug counts for [`JugGoal::Either`].
    ///
    /// A single pour can move several units, so this may overestimate.
    fn heuristic(&self, state: &Levels) -> Cost {
        let Levels(x, y) = *state;
        let h = match self.goal {
            JugGoal::Either(l) => x.abs_diff(l).min(y.abs_diff(l)),
            JugGoal::First(l) => x.abs_diff(l),
            JugGoal::Second(l) => y.abs_diff(l),
            JugGoal::Exact(a, b) => x.abs_diff(a) + y.abs_diff(b),
        };
        h as Cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(buf: Vec<(Levels, Cost)>) -> Vec<Levels> {
        buf.into_iter().map(|(s, _)| s).collect()
    }

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(
            WaterJug::new((0, 3), JugGoal::Either(1)),
            Err(InputError::Capacity { jug: 1 })
        );
        assert_eq!(
            WaterJug::new((4, 0), JugGoal::Either(1)),
            Err(InputError::Capacity { jug: 2 })
        );
    }

    #[test]
    fn rejects_unfit_goals() {
        assert_eq!(
            WaterJug::new((4, 3), JugGoal::Either(5)),
            Err(InputError::GoalLevel {
                level: 5,
                capacity: 4
            })
        );
        assert_eq!(
            WaterJug::new((4, 3), JugGoal::Second(4)),
            Err(InputError::GoalLevel {
                level: 4,
                capacity: 3
            })
        );
        assert!(WaterJug::new((4, 3), JugGoal::Exact(4, 3)).is_ok());
    }

    #[test]
    fn start_validation() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        assert_eq!(jug.check_start(&Levels(4, 3)), Ok(()));
        assert_eq!(
            jug.check_start(&Levels(1, 4)),
            Err(InputError::StartState(1, 4))
        );
    }

    #[test]
    fn successors_from_empty() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let mut buf = Vec::new();
        jug.successors(&Levels(0, 0), &mut buf);
        assert_eq!(states(buf), vec![Levels(4, 0), Levels(0, 3)]);
    }

    #[test]
    fn successors_pour_both_ways() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let mut buf = Vec::new();
        jug.successors(&Levels(3, 2), &mut buf);
        assert_eq!(
            states(buf),
            vec![
                Levels(4, 2),
                Levels(3, 3),
                Levels(0, 2),
                Levels(3, 0),
                Levels(2, 3),
                Levels(4, 1),
            ]
        );
    }

    #[test]
    fn successors_skip_self_and_repeats() {
        let jug = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        let mut buf = Vec::new();
        jug.successors(&Levels(4, 3), &mut buf);
        assert_eq!(states(buf), vec![Levels(0, 3), Levels(4, 0)]);
    }

    #[test]
    fn goal_forms() {
        let either = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        assert!(either.is_goal(&Levels(2, 0)));
        assert!(either.is_goal(&Levels(4, 2)));
        assert!(!either.is_goal(&Levels(1, 3)));

        let first = WaterJug::new((4, 3), JugGoal::First(2)).unwrap();
        assert!(first.is_goal(&Levels(2, 3)));
        assert!(!first.is_goal(&Levels(4, 2)));

        let exact = WaterJug::new((4, 3), JugGoal::Exact(2, 0)).unwrap();
        assert!(exact.is_goal(&Levels(2, 0)));
        assert!(!exact.is_goal(&Levels(2, 3)));
    }

    #[test]
    fn level_distance() {
        let either = WaterJug::new((4, 3), JugGoal::Either(2)).unwrap();
        assert_eq!(either.heuristic(&Levels(0, 3)), 1);
        assert_eq!(either.heuristic(&Levels(4, 0)), 2);

        let exact = WaterJug::new((4, 3), JugGoal::Exact(2, 0)).unwrap();
        assert_eq!(exact.heuristic(&Levels(4, 3)), 5);
    }
}
