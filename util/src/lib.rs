use std::str::FromStr;

use nom::{
    bytes::complete::is_not,
    character::complete::{digit1, one_of, space0, space1},
    combinator::{map_res, opt, recognize},
    error::{FromExternalError, ParseError},
    multi::separated_list0,
    sequence::{delimited, pair},
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{error::ErrorTree, final_parser::final_parser};

pub type Span<'a> = LocatedSpan<&'a str>;

/// Signed decimal integer with an optional `+` or `-` sign.
pub fn parse_number<'a, T, E>(i: Span<'a>) -> IResult<Span<'a>, T, E>
where
    T: FromStr,
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, T::Err>,
{
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |i: Span<'a>| {
        T::from_str(i.fragment())
    })(i)
}

/// Blank-separated tokens of a single line. Runs of spaces or tabs separate
/// tokens, leading and trailing blanks are skipped.
pub fn parse_tokens<'a, E>(i: Span<'a>) -> IResult<Span<'a>, Vec<Span<'a>>, E>
where
    E: ParseError<Span<'a>>,
{
    delimited(space0, separated_list0(space1, is_not(" \t")), space0)(i)
}

/// Every character is either a blank or part of a token, so splitting a
/// line cannot fail and always consumes all of it.
pub fn tokens(line: &str) -> Vec<Span<'_>> {
    parse_tokens::<()>(Span::new(line))
        .map(|(_, tokens)| tokens)
        .unwrap_or_default()
}

/// Parses a whole token as a number; trailing garbage is an error.
pub fn number<T>(token: Span<'_>) -> Result<T, ErrorTree<Span<'_>>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    final_parser(parse_number::<T, ErrorTree<Span>>)(token)
}
