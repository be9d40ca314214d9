use crate::search::State;
use strum_macros::{Display, EnumIter};

/// A unit move between orthogonally adjacent cells.
///
/// The declaration order is the required successor enumeration order: UP,
/// LEFT, DOWN, RIGHT. Which of several equal-length routes a strategy
/// returns depends on this order, so it is part of the contract rather than
/// a presentation detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Action {
    Up,
    Left,
    Down,
    Right,
}

impl Action {
    /// Column and row deltas of the move. Rows grow downwards, so UP
    /// decrements the row.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Left => (-1, 0),
            Action::Down => (0, 1),
            Action::Right => (1, 0),
        }
    }

    /// The cell this move leads to from `state`.
    pub fn apply(self, state: State) -> State {
        let (d_col, d_row) = self.delta();
        State::new(state.col + d_col, state.row + d_row)
    }
}
