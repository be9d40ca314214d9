use crate::parsed_types::MapData;
use crate::parsers::Parser;
use crate::search::{Action, State};
use itertools::iproduct;
use smallvec::SmallVec;
use std::collections::HashSet;
use std::path::Path;
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed map file: {0}")]
    Parse(String),
}

/// The grid geometry: dimensions, wall cells, and the start and goal cells
/// the map file declared. Strategies only ever borrow a grid immutably; the
/// active start and goal set for one search invocation live in
/// [`crate::search::SearchContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    start: State,
    goals: HashSet<State>,
    walls: HashSet<State>,
}

impl Grid {
    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, MapError> {
        let data = MapData::from_str(text).map_err(|e| MapError::Parse(format!("{e:?}")))?;
        Ok(Self::from_map_data(data))
    }

    /// Expands the wall rectangles of a parsed map into individual cells.
    pub fn from_map_data(data: MapData) -> Self {
        let mut walls = HashSet::new();
        for rect in &data.walls {
            for (c, r) in iproduct!(0..rect.width, 0..rect.height) {
                walls.insert(State::new(rect.col + c, rect.row + r));
            }
        }
        Self {
            rows: data.dimensions.rows,
            cols: data.dimensions.cols,
            start: State::new(data.start.col, data.start.row),
            goals: data
                .goals
                .iter()
                .map(|cell| State::new(cell.col, cell.row))
                .collect(),
            walls,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The start cell declared by the map file.
    pub fn start(&self) -> State {
        self.start
    }

    /// The goal cells declared by the map file.
    pub fn goals(&self) -> &HashSet<State> {
        &self.goals
    }

    pub fn in_bounds(&self, state: State) -> bool {
        (0..self.cols).contains(&state.col) && (0..self.rows).contains(&state.row)
    }

    pub fn is_wall(&self, state: State) -> bool {
        self.walls.contains(&state)
    }

    /// Valid successors of `state` in UP, LEFT, DOWN, RIGHT order,
    /// restricted to in-bounds non-wall cells.
    pub fn successors(&self, state: State) -> SmallVec<[(State, Action); 4]> {
        let mut successors = SmallVec::new();
        for action in Action::iter() {
            let next = action.apply(state);
            if self.in_bounds(next) && !self.is_wall(next) {
                successors.push((next, action));
            }
        }
        successors
    }
}
