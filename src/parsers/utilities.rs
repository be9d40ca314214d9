//! Small shared combinators used by the map-file parsers.

use crate::parsers::{ParseResult, Span};
use nom::character::complete::{i32 as nom_i32, space0};
use nom::sequence::delimited;

/// Parses a (possibly signed) integer literal.
pub fn parse_integer(input: Span) -> ParseResult<i32> {
    nom_i32(input)
}

/// Wraps a parser so it tolerates horizontal whitespace on either side.
/// Deliberately does not consume newlines; lines are significant in the map
/// format.
pub fn token<'a, O, F>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(space0, inner, space0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        let (rest, value) = parse_integer(Span::new("42,")).unwrap();
        assert_eq!(value, 42);
        assert_eq!(*rest.fragment(), ",");

        let (_, value) = parse_integer(Span::new("-3")).unwrap();
        assert_eq!(value, -3);

        assert!(parse_integer(Span::new("x")).is_err());
    }

    #[test]
    fn token_eats_spaces_but_not_newlines() {
        let mut parser = token(parse_integer);
        let (rest, value) = parser(Span::new("  7  \nnext")).unwrap();
        assert_eq!(value, 7);
        assert_eq!(*rest.fragment(), "\nnext");
    }
}
