//! Provides a parser for wall rectangles.

use crate::parsed_types::WallRect;
use crate::parsers::{parse_integer, token, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::{delimited, tuple};

/// Parses a wall rectangle of the form `(col,row,width,height)`.
///
/// ## Example
/// ```
/// # use gridnav::parsed_types::WallRect;
/// # use gridnav::parsers::{parse_wall_rect, Span};
/// let (_, rect) = parse_wall_rect(Span::new("(2,0,2,2)")).unwrap();
/// assert_eq!(rect, WallRect::new(2, 0, 2, 2));
/// ```
pub fn parse_wall_rect<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, WallRect> {
    map(
        delimited(
            token(char('(')),
            tuple((
                parse_integer,
                token(char(',')),
                parse_integer,
                token(char(',')),
                parse_integer,
                token(char(',')),
                parse_integer,
            )),
            token(char(')')),
        ),
        |(col, _, row, _, width, _, height)| WallRect::new(col, row, width, height),
    )(input.into())
}

impl crate::parsers::Parser for WallRect {
    type Item = WallRect;

    /// Parses a wall rectangle.
    ///
    /// ## See also
    /// See [`parse_wall_rect`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_wall_rect(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rect() {
        let (_, rect) = parse_wall_rect(Span::new("(8,1,1,2)")).unwrap();
        assert_eq!(rect, WallRect::new(8, 1, 1, 2));
    }

    #[test]
    fn rejects_cell() {
        assert!(parse_wall_rect(Span::new("(8,1)")).is_err());
    }
}
