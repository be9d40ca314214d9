mod action;
mod context;
mod grid;
mod observer;
mod parent_map;
mod route;
mod state;
pub mod strategies;
mod verbosity;

pub use action::Action;
pub use context::{HeuristicValue, SearchContext};
pub use grid::{Grid, MapError};
pub use observer::{ObservedRole, SearchObserver, TraceObserver};
pub use parent_map::ParentMap;
pub use route::Route;
pub use state::State;
pub use verbosity::Verbosity;
