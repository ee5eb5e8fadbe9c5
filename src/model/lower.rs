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

//! Lowering from expression trees to Z3 terms.

use crate::ast::{ArithExpr, ArithOp, BoolExpr, CmpOp, Expr, LogicOp};
use std::collections::BTreeMap;
use tracing::trace;
use z3::Context;
use z3::ast::{Ast, Bool, Int};

use super::SolveError;

/// A lowered expression: integer-sorted or boolean-sorted.
#[derive(Debug, Clone)]
pub enum Term<'ctx> {
    /// Integer term.
    Int(Int<'ctx>),
    /// Boolean term.
    Bool(Bool<'ctx>),
}

/// Translates trees into terms of one Z3 context.
///
/// Free variables are declared on first use and cached by name, so the same
/// name in two lowered expressions maps to the same solver constant.
pub struct Lowerer<'ctx> {
    ctx: &'ctx Context,
    ints: BTreeMap<String, Int<'ctx>>,
    bools: BTreeMap<String, Bool<'ctx>>,
}

impl<'ctx> Lowerer<'ctx> {
    /// Creates a lowerer with no declared variables.
    pub fn new(ctx: &'ctx Context) -> Self {
        Self {
            ctx,
            ints: BTreeMap::new(),
            bools: BTreeMap::new(),
        }
    }

    /// Lowers a parsed expression to the term of its sort.
    pub fn lower(&mut self, expr: &Expr) -> Result<Term<'ctx>, SolveError> {
        match expr {
            Expr::Arith(expr) => self.lower_arith(expr).map(Term::Int),
            Expr::Bool(expr) => self.lower_bool(expr).map(Term::Bool),
        }
    }

    /// Lowers an arithmetic expression to an integer term.
    pub fn lower_arith(&mut self, expr: &ArithExpr) -> Result<Int<'ctx>, SolveError> {
        match expr {
            ArithExpr::Const(value) => Ok(Int::from_i64(self.ctx, *value)),
            ArithExpr::Var(name) => self.int_var(name),
            ArithExpr::Binary { op, left, right } => {
                let left = self.lower_arith(left)?;
                let right = self.lower_arith(right)?;
                Ok(match op {
                    ArithOp::Add => Int::add(self.ctx, &[&left, &right]),
                    ArithOp::Mul => Int::mul(self.ctx, &[&left, &right]),
                })
            }
        }
    }

    /// Lowers a predicate to a boolean term.
    pub fn lower_bool(&mut self, expr: &BoolExpr) -> Result<Bool<'ctx>, SolveError> {
        match expr {
            BoolExpr::Var(name) => self.bool_var(name),
            BoolExpr::Logic { op, left, right } => {
                let left = self.lower_bool(left)?;
                let right = self.lower_bool(right)?;
                Ok(match op {
                    LogicOp::Or => Bool::or(self.ctx, &[&left, &right]),
                    LogicOp::And => Bool::and(self.ctx, &[&left, &right]),
                })
            }
            BoolExpr::Compare { op, left, right } => {
                let left = self.lower_arith(left)?;
                let right = self.lower_arith(right)?;
                Ok(match op {
                    CmpOp::Eq => left._eq(&right),
                    CmpOp::Lt => left.lt(&right),
                })
            }
        }
    }

    /// Returns the integer constant for `name`, declaring it on first use.
    pub fn int_var(&mut self, name: &str) -> Result<Int<'ctx>, SolveError> {
        if self.bools.contains_key(name) {
            return Err(SolveError::SortConflict(name.to_string()));
        }
        if let Some(var) = self.ints.get(name) {
            return Ok(var.clone());
        }
        trace!(name, sort = "Int", "declaring solver variable");
        let var = Int::new_const(self.ctx, name);
        self.ints.insert(name.to_string(), var.clone());
        Ok(var)
    }

    /// Returns the boolean constant for `name`, declaring it on first use.
    pub fn bool_var(&mut self, name: &str) -> Result<Bool<'ctx>, SolveError> {
        if self.ints.contains_key(name) {
            return Err(SolveError::SortConflict(name.to_string()));
        }
        if let Some(var) = self.bools.get(name) {
            return Ok(var.clone());
        }
        trace!(name, sort = "Bool", "declaring solver variable");
        let var = Bool::new_const(self.ctx, name);
        self.bools.insert(name.to_string(), var.clone());
        Ok(var)
    }

    /// Declared integer variables, by name.
    pub fn int_vars(&self) -> &BTreeMap<String, Int<'ctx>> {
        &self.ints
    }

    /// Declared boolean variables, by name.
    pub fn bool_vars(&self) -> &BTreeMap<String, Bool<'ctx>> {
        &self.bools
    }
}
