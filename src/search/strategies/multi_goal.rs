//! Multi-goal route planning through repeated A* legs.

use crate::search::strategies::{AStar, SearchOutcome, SearchStrategy};
use crate::search::{Route, SearchContext, SearchObserver};
use tracing::debug;

/// Visits every goal in the map by running one A* leg per goal: each leg
/// starts where the previous one ended and targets the goals not yet
/// visited. Legs are individually shortest but the stitched route is a
/// nearest-neighbour tour, not a globally shortest one. Node counts sum
/// across legs.
#[derive(Debug)]
pub struct MultiGoalAStar {}

impl MultiGoalAStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for MultiGoalAStar {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        mut observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome {
        let mut current = ctx.start();
        let mut unvisited = ctx.goals().clone();
        let mut route = Route::empty();
        let mut total_nodes = 0;

        if unvisited.is_empty() {
            return SearchOutcome {
                route: Some(route),
                nodes_created: 1,
                reached_goal: None,
            };
        }
        if unvisited.remove(&current) && unvisited.is_empty() {
            return SearchOutcome::found(route, 1, current);
        }

        while !unvisited.is_empty() {
            debug!(%current, remaining = unvisited.len(), "starting leg");
            let leg_ctx = SearchContext::with_endpoints(ctx.grid(), current, unvisited.clone());
            let outcome = AStar::new().search(&leg_ctx, observer.as_deref_mut());
            total_nodes += outcome.nodes_created;
            let (Some(leg_route), Some(reached)) = (outcome.route, outcome.reached_goal) else {
                return SearchOutcome::not_found(total_nodes);
            };
            // A leg only ever ends on one of the goals it was given.
            if !unvisited.remove(&reached) {
                return SearchOutcome::not_found(total_nodes);
            }
            route.extend(leg_route);
            current = reached;
        }

        SearchOutcome::found(route, total_nodes, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Action, Grid, State};
    use crate::test_utils::*;

    fn run(map_text: &str) -> SearchOutcome {
        let grid = Grid::from_text(map_text).unwrap();
        let ctx = SearchContext::from_grid(&grid);
        MultiGoalAStar::new().search(&ctx, None)
    }

    #[test]
    fn visits_the_nearer_goal_then_the_farther_one() {
        let outcome = run(TWO_GOALS_MAP_TEXT);
        assert_eq!(
            outcome,
            SearchOutcome::found(
                Route::new(vec![
                    Action::Left,
                    Action::Right,
                    Action::Right,
                    Action::Right,
                    Action::Right,
                ]),
                8,
                State::new(4, 0)
            )
        );
    }

    #[test]
    fn the_start_counts_as_visited_when_it_is_a_goal() {
        let outcome = run(START_GOAL_PAIR_MAP_TEXT);
        assert_eq!(
            outcome,
            SearchOutcome::found(
                Route::new(vec![Action::Right, Action::Right]),
                3,
                State::new(2, 0)
            )
        );
    }

    #[test]
    fn an_empty_goal_set_yields_an_empty_route() {
        let outcome = run(NO_GOALS_MAP_TEXT);
        assert_eq!(outcome.route, Some(Route::empty()));
        assert_eq!(outcome.nodes_created, 1);
        assert_eq!(outcome.reached_goal, None);
    }

    #[test]
    fn an_unreachable_goal_fails_the_whole_tour() {
        let outcome = run(WALLED_OFF_MAP_TEXT);
        assert_eq!(outcome.route, None);
        assert_eq!(outcome.reached_goal, None);
    }

    #[test]
    fn the_grid_is_untouched_by_the_tour() {
        let grid = Grid::from_text(TWO_GOALS_MAP_TEXT).unwrap();
        let pristine = grid.clone();
        let ctx = SearchContext::from_grid(&grid);
        MultiGoalAStar::new().search(&ctx, None);
        assert_eq!(grid, pristine);
    }
}
