use crate::search::{Action, Route, State};
use std::collections::HashMap;

/// Parent links recorded while a strategy runs. The start state maps to no
/// parent; every other entry maps to the predecessor and the action taken
/// from it. The entry count is the node count a strategy reports: states
/// ever given an entry, not states expanded.
#[derive(Debug)]
pub struct ParentMap {
    links: HashMap<State, Option<(State, Action)>>,
}

impl ParentMap {
    pub fn with_root(start: State) -> Self {
        let mut links = HashMap::new();
        links.insert(start, None);
        Self { links }
    }

    /// Records the link for `state`, overwriting any earlier link. Stack
    /// strategies push a pending state more than once; the most recent push
    /// owns the link.
    pub fn record(&mut self, state: State, parent: State, action: Action) {
        self.links.insert(state, Some((parent, action)));
    }

    /// Records the link only if `state` has none yet.
    pub fn record_if_absent(&mut self, state: State, parent: State, action: Action) {
        self.links.entry(state).or_insert(Some((parent, action)));
    }

    /// Number of states ever given an entry.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Replays the link chain from `goal` back to `start` and reverses it
    /// into the route taken. A broken chain means a strategy recorded a
    /// goal it never linked up, which is a bug in the strategy, not a
    /// recoverable condition.
    pub fn reconstruct(&self, goal: State, start: State) -> Route {
        let mut actions = Vec::new();
        let mut current = goal;
        while current != start {
            let link = self
                .links
                .get(&current)
                .copied()
                .expect("goal state missing from the parent map");
            let (parent, action) = link.expect("parent chain broke before reaching the start");
            actions.push(action);
            current = parent;
        }
        actions.reverse();
        Route::new(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_in_forward_order() {
        let start = State::new(0, 0);
        let mut parent = ParentMap::with_root(start);
        parent.record(State::new(0, 1), start, Action::Down);
        parent.record(State::new(1, 1), State::new(0, 1), Action::Right);

        let route = parent.reconstruct(State::new(1, 1), start);
        assert_eq!(route.actions(), &[Action::Down, Action::Right]);
    }

    #[test]
    fn goal_equal_to_start_gives_empty_route() {
        let start = State::new(2, 3);
        let parent = ParentMap::with_root(start);
        let route = parent.reconstruct(start, start);
        assert!(route.is_empty());
        assert_eq!(parent.len(), 1);
    }

    #[test]
    fn record_overwrites_but_record_if_absent_does_not() {
        let start = State::new(0, 0);
        let mut parent = ParentMap::with_root(start);
        let state = State::new(1, 0);

        parent.record_if_absent(state, start, Action::Right);
        parent.record_if_absent(state, State::new(1, 1), Action::Up);
        assert_eq!(
            parent.reconstruct(state, start).actions(),
            &[Action::Right]
        );

        parent.record(state, State::new(1, 1), Action::Up);
        assert_eq!(parent.len(), 2);
    }

    #[test]
    #[should_panic(expected = "goal state missing")]
    fn reconstructing_an_unrecorded_goal_panics() {
        let parent = ParentMap::with_root(State::new(0, 0));
        parent.reconstruct(State::new(5, 5), State::new(0, 0));
    }
}
