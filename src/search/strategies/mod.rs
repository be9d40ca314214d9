mod astar;
mod bfs;
mod dfs;
mod gbfs;
mod idastar;
mod ids;
mod multi_goal;
mod statistics;
mod strategy;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use gbfs::Gbfs;
pub use idastar::IdaStar;
pub use ids::Ids;
pub use multi_goal::MultiGoalAStar;
pub use statistics::SearchStatistics;
pub use strategy::{SearchOutcome, SearchStrategy, StrategyName};
