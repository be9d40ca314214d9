/// Grid dimensions, first line of a map file: `[rows,cols]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: i32,
    pub cols: i32,
}

impl Dimensions {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }
}

/// A cell coordinate as written in a map file: `(col,row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: i32,
    pub row: i32,
}

impl CellCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// A rectangular block of walls: `(col,row,width,height)` covering `width`
/// columns and `height` rows starting from the named cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallRect {
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
}

impl WallRect {
    pub fn new(col: i32, row: i32, width: i32, height: i32) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }
}

/// Everything a map file declares: dimensions, the start cell, the goal
/// cells (possibly none) and the wall rectangles (possibly none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub dimensions: Dimensions,
    pub start: CellCoord,
    pub goals: Vec<CellCoord>,
    pub walls: Vec<WallRect>,
}

impl MapData {
    pub fn new(
        dimensions: Dimensions,
        start: CellCoord,
        goals: Vec<CellCoord>,
        walls: Vec<WallRect>,
    ) -> Self {
        Self {
            dimensions,
            start,
            goals,
            walls,
        }
    }
}
