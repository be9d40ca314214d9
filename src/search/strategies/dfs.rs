//! Depth-first search.

use crate::search::observer::notify;
use crate::search::strategies::{SearchOutcome, SearchStatistics, SearchStrategy};
use crate::search::{ObservedRole, ParentMap, Route, SearchContext, SearchObserver};
use std::collections::HashSet;

/// Stack-frontier search. Successors are pushed in reverse of the UP, LEFT,
/// DOWN, RIGHT order so that UP pops first. Not optimal: the route returned
/// is whatever the dive happens to find.
#[derive(Debug)]
pub struct Dfs {}

impl Dfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for Dfs {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        mut observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome {
        let mut statistics = SearchStatistics::new();
        let start = ctx.start();
        let mut parent = ParentMap::with_root(start);
        let mut frontier = vec![start];
        let mut explored = HashSet::new();

        if ctx.is_goal(start) {
            notify(&mut observer, start, ObservedRole::Explored);
            statistics.finalise_search();
            return SearchOutcome::found(Route::empty(), parent.len(), start);
        }

        while let Some(current) = frontier.pop() {
            if !explored.insert(current) {
                continue;
            }
            statistics.increment_expanded_nodes();
            notify(&mut observer, current, ObservedRole::Explored);

            if ctx.is_goal(current) {
                statistics.finalise_search();
                let route = parent.reconstruct(current, start);
                return SearchOutcome::found(route, parent.len(), current);
            }

            // A pending state may be pushed again from a different parent;
            // the most recent push owns its parent link.
            for (next, action) in ctx.successors(current).into_iter().rev() {
                if !explored.contains(&next) {
                    frontier.push(next);
                    parent.record(next, current, action);
                    statistics.increment_generated_nodes();
                    notify(&mut observer, next, ObservedRole::Frontier);
                }
            }
            statistics.log_if_needed();
        }

        statistics.finalise_search();
        SearchOutcome::not_found(parent.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Action, Grid, Route, State};
    use crate::test_utils::*;

    fn run(map_text: &str) -> SearchOutcome {
        let grid = Grid::from_text(map_text).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        Dfs::new().search(&ctx, None)
    }

    #[test]
    fn dives_up_first() {
        // From (0,1) both UP and DOWN lead to goals; UP must win.
        let outcome = run("[3,1]\n(0,1)\n(0,0) | (0,2)\n");
        assert_eq!(outcome.route, Some(Route::new(vec![Action::Up])));
        assert_eq!(outcome.reached_goal, Some(State::new(0, 0)));
    }

    #[test]
    fn exhausts_the_reachable_region_when_walled_off() {
        let outcome = run(WALLED_OFF_MAP_TEXT);
        assert_eq!(outcome.route, None);
        assert_eq!(outcome.reached_goal, None);
        // Six cells are reachable on the start's side of the wall.
        assert_eq!(outcome.nodes_created, 6);
    }

    #[test]
    fn explores_everything_when_there_are_no_goals() {
        let outcome = run(NO_GOALS_MAP_TEXT);
        assert_eq!(outcome.route, None);
        assert_eq!(outcome.nodes_created, 4);
    }

    #[test]
    fn observer_sees_frontier_then_explored_events() {
        let grid = Grid::from_text(CORRIDOR_MAP_TEXT).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        let mut recorder = RecordingObserver::default();
        Dfs::new().search(&ctx, Some(&mut recorder));
        assert_eq!(
            recorder.events,
            vec![
                (State::new(0, 0), ObservedRole::Explored),
                (State::new(1, 0), ObservedRole::Frontier),
                (State::new(1, 0), ObservedRole::Explored),
            ]
        );
    }
}
