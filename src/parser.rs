//! ## Sentence Parser
//! Reads the textual form of sentences and queries into [Formula] and [Literal] values.
//!
//! Precedence from loosest to tightest binding is `=>` (right associative), `|`, `&` and
//! prefix `~`. Parentheses may be used freely, so fully parenthesized input such as
//! `((A(x) & B(x)) => H(x))` parses the same as `A(x) & B(x) => H(x)`.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, map, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
};
use thiserror::Error;

use crate::{
    clause::{Literal, Symbol},
    formula::Formula,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error in `{input}` near `{remaining}`")]
    Syntax { input: String, remaining: String },
    #[error("`{0}` is not a single literal")]
    NotALiteral(String),
}

// Wraps a parser so it skips leading and trailing whitespace.
fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(multispace0, inner, multispace0)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn symbol(input: &str) -> IResult<&str, Symbol> {
    map(ws(identifier), Symbol::new)(input)
}

fn atom(input: &str) -> IResult<&str, Literal> {
    let (input, name) = ws(identifier)(input)?;
    let (input, args) = delimited(
        char('('),
        separated_list1(char(','), symbol),
        ws(char(')')),
    )(input)?;
    Ok((input, Literal::mk_pos(name, args)))
}

fn unary(input: &str) -> IResult<&str, Formula> {
    alt((
        map(preceded(ws(char('~')), unary), Formula::not),
        delimited(ws(char('(')), implies, ws(char(')'))),
        map(atom, Formula::Literal),
    ))(input)
}

// Folds `first op rest...` into one n-ary node, a single operand stays as it is.
fn nary(
    first: Formula,
    rest: Vec<Formula>,
    mk: impl FnOnce(Vec<Formula>) -> Formula,
) -> Formula {
    if rest.is_empty() {
        first
    } else {
        let mut fs = Vec::with_capacity(rest.len() + 1);
        fs.push(first);
        fs.extend(rest);
        mk(fs)
    }
}

fn conjunction(input: &str) -> IResult<&str, Formula> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0(preceded(ws(char('&')), unary))(input)?;
    Ok((input, nary(first, rest, Formula::And)))
}

fn disjunction(input: &str) -> IResult<&str, Formula> {
    let (input, first) = conjunction(input)?;
    let (input, rest) = many0(preceded(ws(char('|')), conjunction))(input)?;
    Ok((input, nary(first, rest, Formula::Or)))
}

fn implies(input: &str) -> IResult<&str, Formula> {
    let (input, lhs) = disjunction(input)?;
    match preceded(ws(tag("=>")), implies)(input) {
        Ok((input, rhs)) => Ok((input, Formula::implies(lhs, rhs))),
        Err(nom::Err::Error(_)) => Ok((input, lhs)),
        Err(err) => Err(err),
    }
}

/// Parse a complete sentence.
pub fn parse_formula(input: &str) -> Result<Formula, ParseError> {
    match all_consuming(terminated(implies, multispace0))(input) {
        Ok((_, formula)) => Ok(formula),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(ParseError::Syntax {
            input: input.to_string(),
            remaining: err.input.to_string(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::Syntax {
            input: input.to_string(),
            remaining: String::new(),
        }),
    }
}

/// Parse a query, which has to be a single, possibly negated, literal.
pub fn parse_literal(input: &str) -> Result<Literal, ParseError> {
    match parse_formula(input)? {
        Formula::Literal(lit) => Ok(lit),
        _ => Err(ParseError::NotALiteral(input.to_string())),
    }
}
