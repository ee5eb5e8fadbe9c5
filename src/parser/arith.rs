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

//! Arithmetic grammar.
//!
//! ```text
//! ArithExpr := Term '+' ArithExpr | Term
//! Term      := Factor '*' Term | Factor
//! Factor    := '(' ArithExpr ')' | IntLiteral | Identifier
//! ```
//!
//! Each binary rule draws its left operand from the next tighter level and
//! recurses into its own level on the right. That keeps the grammar free of
//! left recursion, and makes both `+` and `*` right-associative:
//! `a + b + c` parses as `a + (b + c)`.

use crate::ast::{ArithExpr, Span};
use nom::Parser;
use nom::{
    branch::alt,
    combinator::{map, opt},
    error::context,
    sequence::{delimited, preceded},
};

use super::PResult;
use super::utils::{identifier, integer, symbol, ws};

/// Parses `Term '+' ArithExpr | Term`.
///
/// Both alternatives start with `Term`, so it is parsed once; the bare
/// `Term` is the result whenever `'+' ArithExpr` does not follow.
pub(super) fn arith_expr(input: Span<'_>) -> PResult<'_, ArithExpr> {
    let (input, left) = term(input)?;
    let (input, right) = opt(preceded(symbol('+'), arith_expr)).parse(input)?;
    Ok(match right {
        Some(right) => (input, ArithExpr::add(left, right)),
        None => (input, left),
    })
}

/// Parses `Factor '*' Term | Factor`.
pub(super) fn term(input: Span<'_>) -> PResult<'_, ArithExpr> {
    let (input, left) = factor(input)?;
    let (input, right) = opt(preceded(symbol('*'), term)).parse(input)?;
    Ok(match right {
        Some(right) => (input, ArithExpr::mul(left, right)),
        None => (input, left),
    })
}

/// Parses expression atoms.
pub(super) fn factor(input: Span<'_>) -> PResult<'_, ArithExpr> {
    alt((parenthesized, constant, variable)).parse(input)
}

fn parenthesized(input: Span<'_>) -> PResult<'_, ArithExpr> {
    delimited(symbol('('), arith_expr, context("')'", symbol(')'))).parse(input)
}

fn constant(input: Span<'_>) -> PResult<'_, ArithExpr> {
    context("integer literal", map(ws(integer), ArithExpr::Const)).parse(input)
}

fn variable(input: Span<'_>) -> PResult<'_, ArithExpr> {
    context("identifier", map(ws(identifier), ArithExpr::Var)).parse(input)
}
