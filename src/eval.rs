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

//! Environment-driven evaluation of expression trees.
//!
//! Integers are `i64`; `+` and `*` fail with [`EvalError::Overflow`] instead
//! of wrapping. Both operands of `and`/`or` are always evaluated, so an
//! unbound variable on either side is reported.

use crate::ast::{ArithExpr, ArithOp, BoolExpr, CmpOp, Expr, LogicOp, Value};
use std::collections::HashMap;
use std::fmt;

/// Variable bindings used for evaluation.
///
/// Boolean variables read the same map: any non-zero value is `true`.
pub type Env = HashMap<String, i64>;

/// Errors produced while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A referenced variable has no binding in the environment.
    UnboundVariable(String),
    /// An arithmetic result does not fit in `i64`.
    Overflow {
        /// Operator that overflowed.
        op: ArithOp,
        /// Left operand value.
        left: i64,
        /// Right operand value.
        right: i64,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable(name) => write!(f, "Unbound variable '{name}'"),
            EvalError::Overflow { op, left, right } => {
                write!(f, "Integer overflow evaluating {left} {} {right}", op.symbol())
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates a parsed expression under `env`.
pub fn evaluate(expr: &Expr, env: &Env) -> Result<Value, EvalError> {
    match expr {
        Expr::Arith(expr) => expr.eval(env).map(Value::Int),
        Expr::Bool(expr) => expr.eval(env).map(Value::Bool),
    }
}

fn lookup(env: &Env, name: &str) -> Result<i64, EvalError> {
    env.get(name)
        .copied()
        .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
}

impl ArithExpr {
    /// Evaluates this expression to an integer.
    pub fn eval(&self, env: &Env) -> Result<i64, EvalError> {
        match self {
            ArithExpr::Const(value) => Ok(*value),
            ArithExpr::Var(name) => lookup(env, name),
            ArithExpr::Binary { op, left, right } => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                let result = match op {
                    ArithOp::Add => left.checked_add(right),
                    ArithOp::Mul => left.checked_mul(right),
                };
                result.ok_or(EvalError::Overflow {
                    op: *op,
                    left,
                    right,
                })
            }
        }
    }
}

impl BoolExpr {
    /// Evaluates this predicate to a boolean.
    pub fn eval(&self, env: &Env) -> Result<bool, EvalError> {
        match self {
            BoolExpr::Var(name) => lookup(env, name).map(|value| value != 0),
            BoolExpr::Logic { op, left, right } => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                Ok(match op {
                    LogicOp::Or => left || right,
                    LogicOp::And => left && right,
                })
            }
            BoolExpr::Compare { op, left, right } => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                Ok(match op {
                    CmpOp::Eq => left == right,
                    CmpOp::Lt => left < right,
                })
            }
        }
    }
}
