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

//! Integer predicate language: parser, evaluator and SMT lowering.
//!
//! This crate provides:
//! - A `nom` grammar for integer arithmetic (`+`, `*`, parentheses) and
//!   predicates over it (`=`, `<`, `and`, `or`).
//! - Immutable expression trees with structural equality and a canonical,
//!   fully parenthesized rendering.
//! - Evaluation under a variable environment.
//! - Lowering of predicates to Z3 and a one-shot solve API.
//!
//! # Pipeline
//!
//! 1. Parse source text into an [`Expr`] (predicates are tried before bare
//!    arithmetic).
//! 2. Either evaluate the tree with an [`Env`], or
//! 3. lower every constraint into one Z3 session and read back an
//!    [`Assignment`] or an [`SolveOutcome::Unsatisfiable`] verdict.
//!
//! # Associativity
//!
//! `+`, `*`, `and` and `or` all group to the right:
//!
//! ```
//! let expr = intpred::parse_expr("x + y + z").unwrap();
//! assert_eq!(intpred::render(&expr), "(x + (y + z))");
//! ```

mod ast;
mod diagnostics;
mod eval;
mod model;
mod parser;

pub use ast::{ArithExpr, ArithOp, BoolExpr, CmpOp, Expr, LogicOp, SourceSpan, Span, Value};
pub use diagnostics::ParseError;
pub use eval::{Env, EvalError, evaluate};
pub use model::{Assignment, Lowerer, SolveError, SolveOptions, SolveOutcome, Term};

use parser::{parse_arith_source, parse_expr_source, parse_predicate_source};
use std::fmt;

/// Errors from [`evaluate_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The input did not parse.
    Parse(ParseError),
    /// The parsed tree could not be evaluated.
    Eval(EvalError),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Parse(err) => write!(f, "{err}"),
            ExprError::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Parse(err) => Some(err),
            ExprError::Eval(err) => Some(err),
        }
    }
}

impl From<ParseError> for ExprError {
    fn from(value: ParseError) -> Self {
        ExprError::Parse(value)
    }
}

impl From<EvalError> for ExprError {
    fn from(value: EvalError) -> Self {
        ExprError::Eval(value)
    }
}

/// Parses a complete predicate or arithmetic expression.
///
/// # Errors
///
/// Returns [`ParseError`] with line/column and caret highlight when no rule
/// matches or input remains after the longest successful parse.
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    parse_expr_source(source)
}

/// Parses a complete arithmetic expression.
pub fn parse_arith(source: &str) -> Result<ArithExpr, ParseError> {
    parse_arith_source(source)
}

/// Parses a complete predicate.
pub fn parse_predicate(source: &str) -> Result<BoolExpr, ParseError> {
    parse_predicate_source(source)
}

/// Renders a tree in canonical form: every binary node as
/// `(<left> <op> <right>)`.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Parses `source` and evaluates it under `env`.
///
/// ```
/// let env: intpred::Env = [("x".to_string(), 1), ("y".to_string(), 2)].into_iter().collect();
/// assert_eq!(intpred::evaluate_str("x + 2 * y", &env), Ok(intpred::Value::Int(5)));
/// ```
pub fn evaluate_str(source: &str, env: &Env) -> Result<Value, ExprError> {
    let expr = parse_expr(source)?;
    Ok(evaluate(&expr, env)?)
}

/// Parses every constraint and checks them together with default options.
///
/// # Errors
///
/// Returns [`SolveError`] for syntax errors, non-predicate constraints and
/// backend failures. Unsatisfiability is reported as
/// [`SolveOutcome::Unsatisfiable`], not as an error.
pub fn solve(sources: &[&str]) -> Result<SolveOutcome, SolveError> {
    solve_with_options(sources, &SolveOptions::default())
}

/// Like [`solve`], with explicit [`SolveOptions`].
pub fn solve_with_options(
    sources: &[&str],
    options: &SolveOptions,
) -> Result<SolveOutcome, SolveError> {
    model::solve_sources(sources, options)
}

/// Checks already-parsed constraints together.
pub fn solve_exprs(
    constraints: &[Expr],
    options: &SolveOptions,
) -> Result<SolveOutcome, SolveError> {
    model::solve_exprs(constraints, options)
}

#[cfg(test)]
mod tests;
