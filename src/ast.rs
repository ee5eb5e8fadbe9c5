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

//! Expression trees for integer arithmetic and the predicates built on it.
//!
//! Trees carry no source positions: equality is purely structural, so a tree
//! rendered with [`fmt::Display`] and parsed again compares equal to the
//! tree it was rendered from.

use nom_locate::LocatedSpan;
use std::collections::BTreeSet;
use std::fmt;
use std::ops;

/// Parser input span type carrying byte offsets and line/column info.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Source range and anchor position for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based UTF-8 column.
    pub column: usize,
}

impl SourceSpan {
    /// Creates a source span from parser start/end positions.
    pub fn from_bounds(start: Span<'_>, end: Span<'_>) -> Self {
        Self {
            start: start.location_offset(),
            end: end.location_offset(),
            line: start.location_line() as usize,
            column: start.get_utf8_column(),
        }
    }

    /// Returns span length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the span covers no input.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// Addition (`+`).
    Add,
    /// Multiplication (`*`).
    Mul,
}

impl ArithOp {
    /// Source token for the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Mul => "*",
        }
    }
}

/// Logical connectives over predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    /// Disjunction (`or`).
    Or,
    /// Conjunction (`and`).
    And,
}

impl LogicOp {
    /// Source token for the connective.
    pub fn symbol(self) -> &'static str {
        match self {
            LogicOp::Or => "or",
            LogicOp::And => "and",
        }
    }
}

/// Comparisons between two arithmetic expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// Equality (`=`).
    Eq,
    /// Strict less-than (`<`).
    Lt,
}

impl CmpOp {
    /// Source token for the comparison.
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Lt => "<",
        }
    }
}

/// Integer-valued expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArithExpr {
    /// Integer literal.
    Const(i64),
    /// Integer variable reference.
    Var(String),
    /// Binary operation.
    Binary {
        /// Operator kind.
        op: ArithOp,
        /// Left operand.
        left: Box<ArithExpr>,
        /// Right operand.
        right: Box<ArithExpr>,
    },
}

impl ArithExpr {
    pub fn constant(value: i64) -> Self {
        ArithExpr::Const(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        ArithExpr::Var(name.into())
    }

    pub fn binary(op: ArithOp, left: ArithExpr, right: ArithExpr) -> Self {
        ArithExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: ArithExpr, right: ArithExpr) -> Self {
        Self::binary(ArithOp::Add, left, right)
    }

    pub fn mul(left: ArithExpr, right: ArithExpr) -> Self {
        Self::binary(ArithOp::Mul, left, right)
    }

    /// Returns the distinct variable names referenced by this expression.
    pub fn free_vars(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_vars(&mut names);
        names
    }

    fn collect_vars(&self, names: &mut BTreeSet<String>) {
        match self {
            ArithExpr::Const(_) => {}
            ArithExpr::Var(name) => {
                names.insert(name.clone());
            }
            ArithExpr::Binary { left, right, .. } => {
                left.collect_vars(names);
                right.collect_vars(names);
            }
        }
    }
}

impl fmt::Display for ArithExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithExpr::Const(value) => write!(f, "{value}"),
            ArithExpr::Var(name) => f.write_str(name),
            ArithExpr::Binary { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
        }
    }
}

impl ops::Add for ArithExpr {
    type Output = ArithExpr;

    fn add(self, rhs: ArithExpr) -> ArithExpr {
        ArithExpr::add(self, rhs)
    }
}

impl ops::Mul for ArithExpr {
    type Output = ArithExpr;

    fn mul(self, rhs: ArithExpr) -> ArithExpr {
        ArithExpr::mul(self, rhs)
    }
}

/// Boolean-valued expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoolExpr {
    /// Boolean variable reference.
    ///
    /// The grammar never produces this variant; it exists for trees built
    /// through the API.
    Var(String),
    /// `or` / `and` over two predicates.
    Logic {
        /// Connective kind.
        op: LogicOp,
        /// Left operand.
        left: Box<BoolExpr>,
        /// Right operand.
        right: Box<BoolExpr>,
    },
    /// `=` / `<` over two arithmetic expressions.
    Compare {
        /// Comparison kind.
        op: CmpOp,
        /// Left operand.
        left: Box<ArithExpr>,
        /// Right operand.
        right: Box<ArithExpr>,
    },
}

impl BoolExpr {
    pub fn var(name: impl Into<String>) -> Self {
        BoolExpr::Var(name.into())
    }

    pub fn logic(op: LogicOp, left: BoolExpr, right: BoolExpr) -> Self {
        BoolExpr::Logic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn compare(op: CmpOp, left: ArithExpr, right: ArithExpr) -> Self {
        BoolExpr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: BoolExpr, right: BoolExpr) -> Self {
        Self::logic(LogicOp::Or, left, right)
    }

    pub fn and(left: BoolExpr, right: BoolExpr) -> Self {
        Self::logic(LogicOp::And, left, right)
    }

    pub fn eq(left: ArithExpr, right: ArithExpr) -> Self {
        Self::compare(CmpOp::Eq, left, right)
    }

    pub fn lt(left: ArithExpr, right: ArithExpr) -> Self {
        Self::compare(CmpOp::Lt, left, right)
    }

    /// Returns the distinct variable names referenced by this predicate.
    ///
    /// Integer and boolean variables share one namespace here.
    pub fn free_vars(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_vars(&mut names);
        names
    }

    fn collect_vars(&self, names: &mut BTreeSet<String>) {
        match self {
            BoolExpr::Var(name) => {
                names.insert(name.clone());
            }
            BoolExpr::Logic { left, right, .. } => {
                left.collect_vars(names);
                right.collect_vars(names);
            }
            BoolExpr::Compare { left, right, .. } => {
                left.collect_vars(names);
                right.collect_vars(names);
            }
        }
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::Var(name) => f.write_str(name),
            BoolExpr::Logic { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
            BoolExpr::Compare { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
        }
    }
}

/// Result of the combined grammar: either a predicate or a bare arithmetic
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Arithmetic expression.
    Arith(ArithExpr),
    /// Predicate.
    Bool(BoolExpr),
}

impl Expr {
    /// Returns the distinct variable names referenced by this expression.
    pub fn free_vars(&self) -> BTreeSet<String> {
        match self {
            Expr::Arith(expr) => expr.free_vars(),
            Expr::Bool(expr) => expr.free_vars(),
        }
    }
}

impl From<ArithExpr> for Expr {
    fn from(value: ArithExpr) -> Self {
        Expr::Arith(value)
    }
}

impl From<BoolExpr> for Expr {
    fn from(value: BoolExpr) -> Self {
        Expr::Bool(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Arith(expr) => write!(f, "{expr}"),
            Expr::Bool(expr) => write!(f, "{expr}"),
        }
    }
}

/// Value produced by evaluation or read back from a solver model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
}

impl Value {
    /// Returns the integer payload, if any.
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(v),
            Value::Bool(_) => None,
        }
    }

    /// Returns the boolean payload, if any.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(v),
            Value::Int(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
        }
    }
}
