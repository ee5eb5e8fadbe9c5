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

//! Solve verdicts and typed access to satisfying assignments.

use crate::ast::{Expr, Value};
use crate::eval::{Env, EvalError, evaluate};
use std::collections::BTreeMap;
use std::fmt;

use super::SolveError;

/// Verdict of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A witnessing assignment exists.
    Satisfiable(Assignment),
    /// No assignment satisfies every constraint.
    Unsatisfiable,
}

impl SolveOutcome {
    /// Returns whether the constraint set is satisfiable.
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SolveOutcome::Satisfiable(_))
    }

    /// Returns whether the constraint set is unsatisfiable.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SolveOutcome::Unsatisfiable)
    }

    /// Returns the witnessing assignment when satisfiable.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveOutcome::Satisfiable(assignment) => Some(assignment),
            SolveOutcome::Unsatisfiable => None,
        }
    }
}

/// One value per variable referenced by the solved constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pub(crate) values: BTreeMap<String, Value>,
}

impl Assignment {
    /// Returns all values by variable name.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Returns the value of `name`, if assigned.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).copied()
    }

    /// Returns an integer value by name.
    pub fn int(&self, name: &str) -> Result<i64, SolveError> {
        self.get(name)
            .and_then(Value::as_int)
            .ok_or_else(|| SolveError::MissingValue(name.to_string()))
    }

    /// Returns a boolean value by name.
    pub fn boolean(&self, name: &str) -> Result<bool, SolveError> {
        self.get(name)
            .and_then(Value::as_bool)
            .ok_or_else(|| SolveError::MissingValue(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converts the assignment into an evaluation environment.
    ///
    /// Boolean values become `1`/`0`.
    pub fn to_env(&self) -> Env {
        self.values
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::Int(v) => *v,
                    Value::Bool(b) => i64::from(*b),
                };
                (name.clone(), value)
            })
            .collect()
    }

    /// Evaluates `expr` under this assignment.
    pub fn check(&self, expr: &Expr) -> Result<Value, EvalError> {
        evaluate(expr, &self.to_env())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, (name, value)) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        f.write_str("]")
    }
}
