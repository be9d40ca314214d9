use crate::search::{Action, Grid, State};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use std::collections::HashSet;

pub type HeuristicValue = OrderedFloat<f64>;

/// One search invocation's view of the world: the grid geometry plus the
/// start state and active goal set for this particular run. The multi-goal
/// sequencer builds a fresh context per leg instead of mutating anything
/// shared, so nothing ever needs restoring.
#[derive(Debug)]
pub struct SearchContext<'a> {
    grid: &'a Grid,
    start: State,
    goals: HashSet<State>,
}

impl<'a> SearchContext<'a> {
    /// A context using the start and goal set the map file declared.
    pub fn from_grid(grid: &'a Grid) -> Self {
        Self {
            grid,
            start: grid.start(),
            goals: grid.goals().clone(),
        }
    }

    /// A context between arbitrary endpoints on the same grid.
    pub fn with_endpoints(grid: &'a Grid, start: State, goals: HashSet<State>) -> Self {
        Self { grid, start, goals }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn goals(&self) -> &HashSet<State> {
        &self.goals
    }

    pub fn is_goal(&self, state: State) -> bool {
        self.goals.contains(&state)
    }

    /// Minimum Manhattan distance from `state` to any active goal, or
    /// positive infinity if the goal set is empty (no state is a goal then,
    /// and informed strategies degrade to insertion order).
    pub fn heuristic(&self, state: State) -> HeuristicValue {
        self.goals
            .iter()
            .map(|&goal| state.manhattan_distance(goal))
            .min()
            .map_or(OrderedFloat(f64::INFINITY), |d| OrderedFloat(f64::from(d)))
    }

    pub fn successors(&self, state: State) -> SmallVec<[(State, Action); 4]> {
        self.grid.successors(state)
    }
}
