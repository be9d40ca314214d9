//! Provides parsers for the goal-cell line and for whole map files.

use crate::parsed_types::{CellCoord, MapData};
use crate::parsers::{parse_cell, parse_dimensions, parse_wall_rect, token, ParseResult, Span};
use nom::character::complete::{char, multispace0};
use nom::multi::{many0, separated_list0};
use nom::sequence::preceded;

/// Parses the pipe-separated goal-cell line, e.g. `(7,0) | (10,3)`. A map
/// with no goals has an empty line here, which parses to an empty list.
pub fn parse_goal_cells<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<CellCoord>> {
    separated_list0(token(char('|')), parse_cell)(input.into())
}

/// Parses a complete map file.
///
/// ## Example
/// ```
/// # use gridnav::parsers::{parse_map_data, Span};
/// let input = "[5,11]\n(0,1)\n(7,0) | (10,3)\n(2,0,2,2)\n";
/// let (_, data) = parse_map_data(Span::new(input)).unwrap();
/// assert_eq!(data.goals.len(), 2);
/// assert_eq!(data.walls.len(), 1);
/// ```
pub fn parse_map_data<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, MapData> {
    let input = input.into();
    let (input, dimensions) = preceded(multispace0, parse_dimensions)(input)?;
    let (input, start) = preceded(multispace0, parse_cell)(input)?;
    let (input, goals) = preceded(multispace0, parse_goal_cells)(input)?;
    let (input, walls) = many0(preceded(multispace0, parse_wall_rect))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, MapData::new(dimensions, start, goals, walls)))
}

impl crate::parsers::Parser for MapData {
    type Item = MapData;

    /// Parses a complete map file.
    ///
    /// ## See also
    /// See [`parse_map_data`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_map_data(input)
    }
}
