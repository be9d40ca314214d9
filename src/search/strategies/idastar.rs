//! Iterative deepening A*.

use crate::search::observer::notify;
use crate::search::strategies::{SearchOutcome, SearchStatistics, SearchStrategy};
use crate::search::{
    HeuristicValue, ObservedRole, ParentMap, Route, SearchContext, SearchObserver, State,
};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use tracing::debug;

/// Repeated cost-bounded depth-first passes. Each pass prunes successors
/// whose path cost plus heuristic exceeds the threshold; the next pass
/// raises the threshold to the smallest pruned value. The reported node
/// count sums the parent map sizes of every pass, the final one included.
#[derive(Debug)]
pub struct IdaStar {
    max_threshold: Option<f64>,
}

enum PassResult {
    Found {
        route: Route,
        nodes_created: usize,
        goal: State,
    },
    /// Something was pruned; retry with the given threshold.
    Pruned(HeuristicValue, usize),
    /// Nothing was pruned, so raising the threshold cannot help.
    Exhausted(usize),
}

impl IdaStar {
    pub fn new() -> Self {
        Self {
            max_threshold: None,
        }
    }

    /// Give up once the next threshold would exceed the given bound.
    pub fn with_max_threshold(max_threshold: f64) -> Self {
        Self {
            max_threshold: Some(max_threshold),
        }
    }

    fn cost_bounded(
        &self,
        ctx: &SearchContext<'_>,
        threshold: HeuristicValue,
        statistics: &mut SearchStatistics,
        observer: &mut Option<&mut (dyn SearchObserver + '_)>,
    ) -> PassResult {
        let start = ctx.start();
        let mut parent = ParentMap::with_root(start);
        let mut frontier = vec![(start, 0u32)];
        let mut gcosts: HashMap<State, u32> = HashMap::from([(start, 0)]);
        let mut next_threshold = HeuristicValue::from(f64::INFINITY);

        while let Some((current, g)) = frontier.pop() {
            // A cheaper path to this state has been queued since.
            if gcosts[&current] < g {
                continue;
            }
            statistics.increment_expanded_nodes();
            notify(observer, current, ObservedRole::Explored);

            if ctx.is_goal(current) {
                return PassResult::Found {
                    route: parent.reconstruct(current, start),
                    nodes_created: parent.len(),
                    goal: current,
                };
            }

            for (next, action) in ctx.successors(current).into_iter().rev() {
                let tentative_g = g + 1;
                let f = ctx.heuristic(next) + HeuristicValue::from(f64::from(tentative_g));
                if f > threshold {
                    next_threshold = next_threshold.min(f);
                    continue;
                }
                match gcosts.get(&next) {
                    Some(&known_g) if known_g <= tentative_g => continue,
                    Some(_) => statistics.increment_reopened_nodes(),
                    None => statistics.increment_generated_nodes(),
                }
                gcosts.insert(next, tentative_g);
                parent.record(next, current, action);
                frontier.push((next, tentative_g));
                notify(observer, next, ObservedRole::Frontier);
            }
            statistics.log_if_needed();
        }

        if next_threshold.is_finite() {
            PassResult::Pruned(next_threshold, parent.len())
        } else {
            PassResult::Exhausted(parent.len())
        }
    }
}

impl SearchStrategy for IdaStar {
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

        let mut threshold = ctx.heuristic(ctx.start());
        let mut total_nodes = 0;
        loop {
            if self
                .max_threshold
                .is_some_and(|cap| threshold > OrderedFloat(cap))
            {
                statistics.finalise_search();
                return SearchOutcome::not_found(total_nodes);
            }
            debug!(threshold = threshold.into_inner(), "starting cost-bounded pass");
            match self.cost_bounded(ctx, threshold, &mut statistics, &mut observer) {
                PassResult::Found {
                    route,
                    nodes_created,
                    goal,
                } => {
                    statistics.finalise_search();
                    return SearchOutcome::found(route, total_nodes + nodes_created, goal);
                }
                PassResult::Exhausted(nodes_created) => {
                    statistics.finalise_search();
                    return SearchOutcome::not_found(total_nodes + nodes_created);
                }
                PassResult::Pruned(next_threshold, nodes_created) => {
                    total_nodes += nodes_created;
                    threshold = next_threshold;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::strategies::AStar;
    use crate::search::Grid;
    use crate::test_utils::*;

    fn run(map_text: &str) -> SearchOutcome {
        let grid = Grid::from_text(map_text).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        IdaStar::new().search(&ctx, None)
    }

    #[test]
    fn matches_the_a_star_route_length_on_the_sample_map() {
        let grid = Grid::from_text(SAMPLE_MAP_TEXT).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        let ida = IdaStar::new().search(&ctx, None);
        let astar = AStar::new().search(&ctx, None);
        assert_eq!(
            ida.route.expect("a goal is reachable").len(),
            astar.route.expect("a goal is reachable").len()
        );
    }

    #[test]
    fn finds_a_shortest_route_around_the_wall() {
        let outcome = run(DETOUR_MAP_TEXT);
        let route = outcome.route.expect("the detour goal is reachable");
        assert_eq!(route.len(), 8);
    }

    #[test]
    fn accumulates_nodes_across_passes_when_walled_off() {
        let outcome = run(WALLED_OFF_MAP_TEXT);
        assert_eq!(outcome.route, None);
        // The final pass alone touches all six reachable cells; earlier
        // passes add to the total.
        assert!(outcome.nodes_created >= 6);
    }

    #[test]
    fn the_threshold_cap_ends_the_search() {
        let grid = Grid::from_text(DETOUR_MAP_TEXT).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        let outcome = IdaStar::with_max_threshold(3.0).search(&ctx, None);
        assert_eq!(outcome.route, None);
    }

    #[test]
    fn reports_no_route_when_there_are_no_goals() {
        let outcome = run(NO_GOALS_MAP_TEXT);
        assert_eq!(outcome.route, None);
        assert_eq!(outcome.reached_goal, None);
    }
}
