//! Provides a parser for the grid-dimensions header line.

use crate::parsed_types::Dimensions;
use crate::parsers::{parse_integer, token, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::{delimited, separated_pair};

/// Parses grid dimensions of the form `[rows,cols]`.
///
/// ## Example
/// ```
/// # use gridnav::parsed_types::Dimensions;
/// # use gridnav::parsers::{parse_dimensions, Span};
/// let (_, dimensions) = parse_dimensions(Span::new("[5,11]")).unwrap();
/// assert_eq!(dimensions, Dimensions::new(5, 11));
/// ```
pub fn parse_dimensions<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Dimensions> {
    map(
        delimited(
            token(char('[')),
            separated_pair(parse_integer, token(char(',')), parse_integer),
            token(char(']')),
        ),
        |(rows, cols)| Dimensions::new(rows, cols),
    )(input.into())
}

impl crate::parsers::Parser for Dimensions {
    type Item = Dimensions;

    /// Parses grid dimensions.
    ///
    /// ## See also
    /// See [`parse_dimensions`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_dimensions(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line() {
        let (_, dimensions) = parse_dimensions(Span::new("[5,11]")).unwrap();
        assert_eq!(dimensions.rows, 5);
        assert_eq!(dimensions.cols, 11);
    }

    #[test]
    fn rejects_parens() {
        assert!(parse_dimensions(Span::new("(5,11)")).is_err());
    }
}
