//! Parsers for the map-file format. One line of grid dimensions, one start
//! cell, one line of pipe-separated goal cells and any number of wall
//! rectangle lines:
//!
//! ```text
//! [5,11]
//! (0,1)
//! (7,0) | (10,3)
//! (2,0,2,2)
//! ```

mod cell;
mod dimensions;
mod map_data;
mod utilities;
mod wall_rect;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use cell::parse_cell;
pub use dimensions::parse_dimensions;
pub use map_data::{parse_goal_cells, parse_map_data};
pub use utilities::{parse_integer, token};
pub use wall_rect::parse_wall_rect;
