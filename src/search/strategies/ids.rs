//! Iterative deepening depth-first search.

use crate::search::observer::notify;
use crate::search::strategies::{SearchOutcome, SearchStatistics, SearchStrategy};
use crate::search::{ObservedRole, ParentMap, Route, SearchContext, SearchObserver};
use std::collections::HashSet;
use tracing::debug;

/// Repeated depth-limited searches with the limit raised by one each pass.
/// Memory stays proportional to the current limit, at the price of
/// re-expanding shallow states every pass. The reported node count is the
/// final pass's.
#[derive(Debug)]
pub struct Ids {
    max_depth: Option<u32>,
}

/// What a single depth-limited pass produced.
enum PassResult {
    Found(SearchOutcome),
    /// The limit cut at least one expansion short; a deeper pass may still
    /// find a goal.
    Truncated(usize),
    /// Every reachable state was expanded within the limit.
    Exhausted(usize),
}

impl Ids {
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Stop after the pass with the given depth limit instead of deepening
    /// until the reachable region is exhausted.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    fn depth_limited(
        &self,
        ctx: &SearchContext<'_>,
        limit: u32,
        statistics: &mut SearchStatistics,
        observer: &mut Option<&mut (dyn SearchObserver + '_)>,
    ) -> PassResult {
        let start = ctx.start();
        let mut parent = ParentMap::with_root(start);
        let mut frontier = vec![(start, 0u32)];
        let mut explored = HashSet::new();
        let mut truncated = false;

        while let Some((current, depth)) = frontier.pop() {
            if !explored.insert(current) {
                continue;
            }
            statistics.increment_expanded_nodes();
            notify(observer, current, ObservedRole::Explored);

            if ctx.is_goal(current) {
                let route = parent.reconstruct(current, start);
                return PassResult::Found(SearchOutcome::found(route, parent.len(), current));
            }
            if depth >= limit {
                truncated = true;
                continue;
            }

            for (next, action) in ctx.successors(current).into_iter().rev() {
                if !explored.contains(&next) {
                    frontier.push((next, depth + 1));
                    parent.record_if_absent(next, current, action);
                    statistics.increment_generated_nodes();
                    notify(observer, next, ObservedRole::Frontier);
                }
            }
            statistics.log_if_needed();
        }

        if truncated {
            PassResult::Truncated(parent.len())
        } else {
            PassResult::Exhausted(parent.len())
        }
    }
}

impl SearchStrategy for Ids {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        mut observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome {
        let mut statistics = SearchStatistics::new();

        if ctx.is_goal(ctx.start()) {
            notify(&mut observer, ctx.start(), ObservedRole::Explored);
            statistics.finalise_search();
            return SearchOutcome::found(Route::empty(), 1, ctx.start());
        }

        let mut limit = 0;
        loop {
            debug!(limit, "starting depth-limited pass");
            match self.depth_limited(ctx, limit, &mut statistics, &mut observer) {
                PassResult::Found(outcome) => {
                    statistics.finalise_search();
                    return outcome;
                }
                PassResult::Exhausted(nodes_created) => {
                    statistics.finalise_search();
                    return SearchOutcome::not_found(nodes_created);
                }
                PassResult::Truncated(nodes_created) => {
                    if self.max_depth.is_some_and(|cap| limit >= cap) {
                        statistics.finalise_search();
                        return SearchOutcome::not_found(nodes_created);
                    }
                }
            }
            limit += 1;
        }
    }
}
