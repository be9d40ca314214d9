//! A* search.

use crate::search::observer::notify;
use crate::search::strategies::{SearchOutcome, SearchStatistics, SearchStrategy};
use crate::search::{
    HeuristicValue, ObservedRole, ParentMap, Route, SearchContext, SearchObserver, State,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Best-first search ordered by path cost plus heuristic. With the
/// admissible Manhattan-distance heuristic the first goal expanded is
/// reached by a shortest route.
#[derive(Debug)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for AStar {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        mut observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome {
        let mut statistics = SearchStatistics::new();
        let start = ctx.start();
        let mut parent = ParentMap::with_root(start);
        let mut frontier: PriorityQueue<State, Reverse<(HeuristicValue, u64)>> =
            PriorityQueue::new();
        let mut gcosts: HashMap<State, u32> = HashMap::from([(start, 0)]);
        let mut insertions: u64 = 0;

        if ctx.is_goal(start) {
            notify(&mut observer, start, ObservedRole::Explored);
            statistics.finalise_search();
            return SearchOutcome::found(Route::empty(), parent.len(), start);
        }

        frontier.push(start, Reverse((ctx.heuristic(start), insertions)));

        while let Some((current, _)) = frontier.pop() {
            statistics.increment_expanded_nodes();
            notify(&mut observer, current, ObservedRole::Explored);

            if ctx.is_goal(current) {
                statistics.finalise_search();
                let route = parent.reconstruct(current, start);
                return SearchOutcome::found(route, parent.len(), current);
            }

            // No closed set: a state found again on a strictly better g is
            // re-queued even after it has been expanded.
            let current_g = gcosts[&current];
            for (next, action) in ctx.successors(current) {
                let tentative_g = current_g + 1;
                match gcosts.get(&next) {
                    Some(&known_g) if known_g <= tentative_g => continue,
                    Some(_) => statistics.increment_reopened_nodes(),
                    None => statistics.increment_generated_nodes(),
                }
                gcosts.insert(next, tentative_g);
                parent.record(next, current, action);
                insertions += 1;
                let f = ctx.heuristic(next) + HeuristicValue::from(f64::from(tentative_g));
                // `push` replaces the priority of an entry already queued.
                frontier.push(next, Reverse((f, insertions)));
                notify(&mut observer, next, ObservedRole::Frontier);
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
        AStar::new().search(&ctx, None)
    }

    #[test]
    fn finds_a_shortest_route_around_the_wall() {
        let outcome = run(DETOUR_MAP_TEXT);
        let route = outcome.route.expect("the detour goal is reachable");
        assert_eq!(route.len(), 8);
    }

    #[test]
    fn matches_the_breadth_first_route_length_on_the_sample_map() {
        let grid = Grid::from_text(SAMPLE_MAP_TEXT).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        let astar = AStar::new().search(&ctx, None);
        let bfs = crate::search::strategies::Bfs::new().search(&ctx, None);
        assert_eq!(
            astar.route.expect("a goal is reachable").len(),
            bfs.route.expect("a goal is reachable").len()
        );
    }

    #[test]
    fn revisits_of_expanded_states_fall_to_the_g_check() {
        // Open grid: every interior cell is generated again from later
        // parents, including ones already expanded. The strict g comparison
        // alone decides what survives; the route must stay shortest.
        let outcome = run("[4,4]\n(0,0)\n(3,3)\n");
        let route = outcome.route.expect("the far corner is reachable");
        assert_eq!(route.len(), 6);
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
        assert_eq!(outcome.nodes_created, 4);
    }
}
