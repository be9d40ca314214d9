use std::fmt;

/// A grid cell identified by column and row. Plain value type; produced by
/// the grid and passed around by copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub col: i32,
    pub row: i32,
}

impl State {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn manhattan_distance(self, other: State) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = State::new(0, 1);
        let b = State::new(7, 0);
        assert_eq!(a.manhattan_distance(b), 8);
        assert_eq!(b.manhattan_distance(a), 8);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn display_matches_coordinate_order() {
        assert_eq!(State::new(7, 0).to_string(), "(7, 0)");
    }
}
