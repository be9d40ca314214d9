//! Greedy best-first search.

use crate::search::observer::notify;
use crate::search::strategies::{SearchOutcome, SearchStatistics, SearchStrategy};
use crate::search::{
    HeuristicValue, ObservedRole, ParentMap, Route, SearchContext, SearchObserver,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Best-first search ordered purely by the heuristic. Ties break towards
/// the earlier insertion. Fast in practice but the route it returns is not
/// guaranteed shortest.
#[derive(Debug)]
pub struct Gbfs {}

impl Gbfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for Gbfs {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        mut observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome {
        let mut statistics = SearchStatistics::new();
        let start = ctx.start();
        let mut parent = ParentMap::with_root(start);
        let mut frontier: PriorityQueue<_, Reverse<(HeuristicValue, u64)>> = PriorityQueue::new();
        let mut explored = HashSet::new();
        let mut insertions: u64 = 0;

        if ctx.is_goal(start) {
            notify(&mut observer, start, ObservedRole::Explored);
            statistics.finalise_search();
            return SearchOutcome::found(Route::empty(), parent.len(), start);
        }

        frontier.push(start, Reverse((ctx.heuristic(start), insertions)));

        while let Some((current, _)) = frontier.pop() {
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

            for (next, action) in ctx.successors(current) {
                if !explored.contains(&next) && frontier.get(&next).is_none() {
                    insertions += 1;
                    frontier.push(next, Reverse((ctx.heuristic(next), insertions)));
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
