//! Breadth-first search.

use crate::search::observer::notify;
use crate::search::strategies::{SearchOutcome, SearchStatistics, SearchStrategy};
use crate::search::{ObservedRole, ParentMap, Route, SearchContext, SearchObserver};
use std::collections::{HashSet, VecDeque};

/// Queue-frontier search. Expands states in order of distance from the
/// start, so the first goal taken off the queue is reached by a shortest
/// route.
#[derive(Debug)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for Bfs {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        mut observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome {
        let mut statistics = SearchStatistics::new();
        let start = ctx.start();
        let mut parent = ParentMap::with_root(start);
        let mut frontier = VecDeque::from([start]);
        let mut explored = HashSet::new();

        if ctx.is_goal(start) {
            notify(&mut observer, start, ObservedRole::Explored);
            statistics.finalise_search();
            return SearchOutcome::found(Route::empty(), parent.len(), start);
        }

        while let Some(current) = frontier.pop_front() {
            statistics.increment_expanded_nodes();
            notify(&mut observer, current, ObservedRole::Explored);

            if ctx.is_goal(current) {
                statistics.finalise_search();
                let route = parent.reconstruct(current, start);
                return SearchOutcome::found(route, parent.len(), current);
            }

            // Membership is settled at insertion time, so a state is queued
            // at most once and keeps the first parent that found it.
            for (next, action) in ctx.successors(current) {
                if explored.insert(next) {
                    frontier.push_back(next);
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
    use crate::search::Grid;
    use crate::test_utils::*;

    fn run(map_text: &str) -> SearchOutcome {
        let grid = Grid::from_text(map_text).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        Bfs::new().search(&ctx, None)
    }

    #[test]
    fn finds_a_shortest_route_around_the_wall() {
        let outcome = run(DETOUR_MAP_TEXT);
        let route = outcome.route.expect("the detour goal is reachable");
        assert_eq!(route.len(), 8);
    }

    #[test]
    fn counts_the_reachable_region_when_walled_off() {
        let outcome = run(WALLED_OFF_MAP_TEXT);
        assert_eq!(outcome.route, None);
        assert_eq!(outcome.nodes_created, 6);
    }

    #[test]
    fn reports_no_route_when_there_are_no_goals() {
        let outcome = run(NO_GOALS_MAP_TEXT);
        assert_eq!(outcome.route, None);
        assert_eq!(outcome.reached_goal, None);
        assert_eq!(outcome.nodes_created, 4);
    }
}
