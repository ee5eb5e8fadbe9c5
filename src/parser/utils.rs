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

//! Token-level parsers shared by the grammar rules.
//!
//! Every token parser skips surrounding whitespace, so grammar rules never
//! deal with trivia themselves.

use crate::ast::Span;
use nom::Parser;
use nom::{
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{map, map_res, not, recognize, value, verify},
    sequence::{pair, terminated},
};

use super::PResult;

/// Words that can never be used as identifiers.
pub(super) const RESERVED_WORDS: [&str; 2] = ["and", "or"];

/// Parses identifiers other than reserved words.
///
/// An identifier starts with an alphabetic character or `_` and continues
/// with alphanumerics or `_`. Unicode letters and digits are accepted.
pub(super) fn identifier(input: Span<'_>) -> PResult<'_, String> {
    verify(
        map(
            recognize(pair(
                take_while1(is_ident_start),
                take_while(is_ident_continue),
            )),
            |s: Span<'_>| s.fragment().to_string(),
        ),
        |name: &str| !is_reserved(name),
    )
    .parse(input)
}

/// Parses a non-negative decimal literal that fits in `i64`.
pub(super) fn integer(input: Span<'_>) -> PResult<'_, i64> {
    map_res(digit1, |digits: Span<'_>| digits.fragment().parse::<i64>()).parse(input)
}

/// Returns whether `name` is a reserved word.
pub(super) fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns whether a char can start an identifier.
fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Returns whether a char can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Skips zero-or-more whitespace.
pub(super) fn ws0(input: Span<'_>) -> PResult<'_, ()> {
    value((), multispace0).parse(input)
}

/// Wraps a parser with leading/trailing whitespace skipping.
pub(super) fn ws<'a, O, P>(mut parser: P) -> impl FnMut(Span<'a>) -> PResult<'a, O>
where
    P: FnMut(Span<'a>) -> PResult<'a, O>,
{
    move |input| nom::sequence::delimited(ws0, &mut parser, ws0)(input)
}

/// Parses a single-character symbol token.
pub(super) fn symbol<'a>(c: char) -> impl FnMut(Span<'a>) -> PResult<'a, char> {
    ws(char(c))
}

/// Parses a keyword token.
///
/// The keyword must not run on into an identifier: `order` is not `or`.
pub(super) fn keyword<'a>(word: &'static str) -> impl FnMut(Span<'a>) -> PResult<'a, Span<'a>> {
    ws(terminated(tag(word), not(satisfy(is_ident_continue))))
}
