//! Provides a parser for cell coordinates.

use crate::parsed_types::CellCoord;
use crate::parsers::{parse_integer, token, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::{delimited, separated_pair};

/// Parses a cell coordinate of the form `(col,row)`.
///
/// ## Example
/// ```
/// # use gridnav::parsed_types::CellCoord;
/// # use gridnav::parsers::{parse_cell, Span};
/// let (_, cell) = parse_cell(Span::new("(7, 0)")).unwrap();
/// assert_eq!(cell, CellCoord::new(7, 0));
/// ```
pub fn parse_cell<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, CellCoord> {
    map(
        delimited(
            token(char('(')),
            separated_pair(parse_integer, token(char(',')), parse_integer),
            token(char(')')),
        ),
        |(col, row)| CellCoord::new(col, row),
    )(input.into())
}

impl crate::parsers::Parser for CellCoord {
    type Item = CellCoord;

    /// Parses a cell coordinate.
    ///
    /// ## See also
    /// See [`parse_cell`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_cell(input)
    }
}
