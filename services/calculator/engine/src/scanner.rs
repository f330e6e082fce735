use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map, map_res, opt, recognize},
    error::{Error, ErrorKind},
    sequence::pair,
    IResult, Parser,
};

use crate::token::{Operator, MINUS};

const SIGNS: &str = "+-−";
const OPERATORS: &str = "+-−*×/÷";

/// Attempts an anchored match of `pattern` at byte offset `index` of `text`.
///
/// Returns the parsed value and the offset just past the match, or `None` and
/// the unchanged `index`.
pub fn match_at<'a, T, P>(mut pattern: P, text: &'a str, index: usize) -> (Option<T>, usize)
where
    P: Parser<&'a str, T, Error<&'a str>>,
{
    let rest = match text.get(index..) {
        Some(rest) => rest,
        None => return (None, index),
    };
    match pattern.parse(rest) {
        Ok((remaining, value)) => (Some(value), text.len() - remaining.len()),
        Err(_) => (None, index),
    }
}

/// A decimal number with an optional sign, e.g. `-3`, `+2.5`, `−.5`, `7.`
pub fn number(i: &str) -> IResult<&str, f64> {
    let (rest, sign) = opt(one_of(SIGNS))(i)?;
    let (rest, digits) = recognize(alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    )))(rest)?;

    let magnitude: f64 = digits
        .parse()
        .map_err(|_| nom::Err::Error(Error::new(i, ErrorKind::Float)))?;

    match sign {
        Some('-') | Some(MINUS) => Ok((rest, -magnitude)),
        _ => Ok((rest, magnitude)),
    }
}

/// A single operator glyph, normalized to its canonical form
pub fn operator(i: &str) -> IResult<&str, Operator> {
    map_res(recognize(one_of(OPERATORS)), Operator::from_str)(i)
}

/// The case-insensitive previous answer keyword, `Ans` or `Answer`
pub fn ans_keyword(i: &str) -> IResult<&str, &str> {
    alt((tag_no_case("answer"), tag_no_case("ans")))(i)
}

/// Like [`ans_keyword`] but yields the keyword with its display casing
pub fn ans_display(i: &str) -> IResult<&str, &'static str> {
    map(ans_keyword, |keyword: &str| {
        if keyword.len() > 3 {
            "Answer"
        } else {
            "Ans"
        }
    })(i)
}
