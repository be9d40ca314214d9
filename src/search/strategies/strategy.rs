use crate::search::strategies::{AStar, Bfs, Dfs, Gbfs, IdaStar, Ids, MultiGoalAStar};
use crate::search::{Route, SearchContext, SearchObserver, State};
use clap;

/// What one strategy invocation produced: the route to the reached goal (or
/// nothing when no goal is reachable), the number of states ever recorded
/// in the parent map, and which goal was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub route: Option<Route>,
    pub nodes_created: usize,
    pub reached_goal: Option<State>,
}

impl SearchOutcome {
    pub fn found(route: Route, nodes_created: usize, reached_goal: State) -> Self {
        Self {
            route: Some(route),
            nodes_created,
            reached_goal: Some(reached_goal),
        }
    }

    pub fn not_found(nodes_created: usize) -> Self {
        Self {
            route: None,
            nodes_created,
            reached_goal: None,
        }
    }
}

pub trait SearchStrategy {
    fn search(
        &mut self,
        ctx: &SearchContext<'_>,
        observer: Option<&mut (dyn SearchObserver + '_)>,
    ) -> SearchOutcome;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum StrategyName {
    #[clap(help = "Depth-first search. Not guaranteed to find a shortest route.")]
    Dfs,
    #[clap(help = "Breadth-first search. Returns a shortest route.")]
    Bfs,
    #[clap(help = "Greedy best-first search guided by the Manhattan-distance heuristic.")]
    Gbfs,
    #[clap(name = "a-star", help = "A* search. Returns a shortest route.")]
    AStar,
    #[clap(
        alias = "cus1",
        help = "Iterative deepening depth-first search. Bounded memory, repeated work."
    )]
    Ids,
    #[clap(
        name = "ida-star",
        alias = "cus2",
        help = "Iterative deepening A*. Returns a shortest route with bounded memory."
    )]
    IdaStar,
    #[clap(
        name = "multi-goal",
        alias = "mas",
        help = "Repeated A* legs visiting every goal in the map."
    )]
    MultiGoal,
}

impl StrategyName {
    pub fn create(&self) -> Box<dyn SearchStrategy> {
        match self {
            StrategyName::Dfs => Box::new(Dfs::new()),
            StrategyName::Bfs => Box::new(Bfs::new()),
            StrategyName::Gbfs => Box::new(Gbfs::new()),
            StrategyName::AStar => Box::new(AStar::new()),
            StrategyName::Ids => Box::new(Ids::new()),
            StrategyName::IdaStar => Box::new(IdaStar::new()),
            StrategyName::MultiGoal => Box::new(MultiGoalAStar::new()),
        }
    }
}
