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

//! Predicate grammar and the combined entry rule.
//!
//! ```text
//! Expr     := BoolExpr | ArithExpr
//! BoolExpr := Disj 'or' BoolExpr | Disj
//! Disj     := Conj 'and' Disj | Conj
//! Conj     := Cmp | '(' BoolExpr ')'
//! Cmp      := ArithExpr '=' ArithExpr | ArithExpr '<' ArithExpr
//! ```
//!
//! `and` binds tighter than `or`; both group to the right.

use crate::ast::{BoolExpr, CmpOp, Expr, Span};
use nom::Parser;
use nom::{
    branch::alt,
    combinator::{map, opt, value},
    error::context,
    sequence::{delimited, pair, preceded},
};

use super::PResult;
use super::arith::arith_expr;
use super::utils::{keyword, symbol};

/// Parses `BoolExpr | ArithExpr`.
///
/// Predicates are tried first. An arithmetic-only input never contains a
/// comparison, so it always falls through to the second alternative.
pub(super) fn expr(input: Span<'_>) -> PResult<'_, Expr> {
    alt((map(bool_expr, Expr::Bool), map(arith_expr, Expr::Arith))).parse(input)
}

/// Parses `Disj 'or' BoolExpr | Disj`, parsing the shared `Disj` once.
pub(super) fn bool_expr(input: Span<'_>) -> PResult<'_, BoolExpr> {
    let (input, left) = disj(input)?;
    let (input, right) = opt(preceded(keyword("or"), bool_expr)).parse(input)?;
    Ok(match right {
        Some(right) => (input, BoolExpr::or(left, right)),
        None => (input, left),
    })
}

/// Parses `Conj 'and' Disj | Conj`, parsing the shared `Conj` once.
fn disj(input: Span<'_>) -> PResult<'_, BoolExpr> {
    let (input, left) = conj(input)?;
    let (input, right) = opt(preceded(keyword("and"), disj)).parse(input)?;
    Ok(match right {
        Some(right) => (input, BoolExpr::and(left, right)),
        None => (input, left),
    })
}

/// Parses `Cmp | '(' BoolExpr ')'`.
fn conj(input: Span<'_>) -> PResult<'_, BoolExpr> {
    alt((cmp, parenthesized)).parse(input)
}

fn parenthesized(input: Span<'_>) -> PResult<'_, BoolExpr> {
    delimited(symbol('('), bool_expr, context("')'", symbol(')'))).parse(input)
}

/// Parses `ArithExpr '=' ArithExpr | ArithExpr '<' ArithExpr`.
///
/// The left operand is shared by both alternatives and parsed once; `=` is
/// tried before `<`.
fn cmp(input: Span<'_>) -> PResult<'_, BoolExpr> {
    let (input, left) = arith_expr(input)?;
    let (input, (op, right)) = context(
        "comparison",
        pair(
            alt((
                value(CmpOp::Eq, symbol('=')),
                value(CmpOp::Lt, symbol('<')),
            )),
            arith_expr,
        ),
    )
    .parse(input)?;
    Ok((input, BoolExpr::compare(op, left, right)))
}
