/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! `nom` parser for integer arithmetic and predicates over it.
//!
//! The grammar is a set of mutually recursive rules built from ordered
//! choice (`alt`) and sequencing. Rules are plain `fn` items, so recursion
//! between them is resolved at call time rather than while building parsers.
//! Alternatives that begin with the same operand parse it once and then
//! branch on the following token.
//!
//! Operator summary, loosest first: `or`, `and`, `=`/`<`, `+`, `*`.
//! Every binary operator except the comparisons groups to the right.

mod arith;
mod predicate;
mod utils;

use crate::ast::{ArithExpr, BoolExpr, Expr, SourceSpan, Span};
use crate::diagnostics::ParseError;
use nom::{
    IResult, Parser,
    combinator::all_consuming,
    error::{ErrorKind, VerboseError, VerboseErrorKind, context},
    sequence::delimited,
};

use self::utils::ws0;

type PResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;

/// Parses a complete input under the combined grammar.
pub(crate) fn parse_expr_source(source: &str) -> Result<Expr, ParseError> {
    run_to_completion(source, "expression", predicate::expr)
}

/// Parses a complete arithmetic expression.
pub(crate) fn parse_arith_source(source: &str) -> Result<ArithExpr, ParseError> {
    run_to_completion(source, "arithmetic expression", arith::arith_expr)
}

/// Parses a complete predicate.
pub(crate) fn parse_predicate_source(source: &str) -> Result<BoolExpr, ParseError> {
    run_to_completion(source, "predicate", predicate::bool_expr)
}

fn run_to_completion<'a, O, P>(
    source: &'a str,
    label: &'static str,
    parser: P,
) -> Result<O, ParseError>
where
    P: Parser<Span<'a>, O, VerboseError<Span<'a>>>,
{
    let input = Span::new(source);
    // `all_consuming` turns leftover input into a syntax error.
    match all_consuming(delimited(ws0, context(label, parser), ws0))(input) {
        Ok((_, value)) => Ok(value),
        Err(err) => Err(parse_error_from_nom(err, source)),
    }
}

/// Converts a `nom` verbose error to a located [`ParseError`].
fn parse_error_from_nom(err: nom::Err<VerboseError<Span<'_>>>, source: &str) -> ParseError {
    match err {
        nom::Err::Incomplete(_) => ParseError::message_only("Incomplete input"),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            // Anchor on the furthest position any rule reached. On ties the
            // last entry wins, which is the entry-point label when nothing
            // got past the first token.
            let furthest = e
                .errors
                .iter()
                .max_by_key(|(span, _)| span.location_offset());
            match furthest {
                Some((span, kind)) => {
                    let span = SourceSpan::from_bounds(*span, *span);
                    ParseError::from_span(describe(kind), source, &span)
                }
                None => ParseError::message_only("Syntax error"),
            }
        }
    }
}

fn describe(kind: &VerboseErrorKind) -> String {
    match kind {
        VerboseErrorKind::Context(ctx) => format!("Syntax error: expected {ctx}"),
        VerboseErrorKind::Char(c) => format!("Syntax error: expected '{c}'"),
        VerboseErrorKind::Nom(ErrorKind::Eof) => "Syntax error: unexpected trailing input".into(),
        VerboseErrorKind::Nom(_) => "Syntax error: unexpected input".into(),
    }
}
