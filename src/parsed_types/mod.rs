//! Raw shapes read out of a map file, before any geometry expansion. The
//! [`crate::parsers`] module produces these; [`crate::search::Grid`] is built
//! from them.

mod map_data;

pub use map_data::{CellCoord, Dimensions, MapData, WallRect};
