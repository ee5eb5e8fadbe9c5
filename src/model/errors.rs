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

//! Error types surfaced by the solve API.

use crate::ParseError;
use std::fmt;

/// Errors produced while parsing, lowering or solving a constraint set.
///
/// An unsatisfiable set is not an error; see
/// [`SolveOutcome::Unsatisfiable`](super::SolveOutcome::Unsatisfiable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Constraint `index` failed to parse.
    Parse {
        /// Position of the constraint in the input list.
        index: usize,
        /// Syntax diagnostic.
        error: ParseError,
    },
    /// Constraint `index` is an arithmetic expression, not a predicate.
    NotPredicate {
        /// Position of the constraint in the input list.
        index: usize,
    },
    /// A name is used both as an integer and as a boolean variable.
    SortConflict(String),
    /// A requested value is not present in the assignment.
    MissingValue(String),
    /// The backend gave up without a verdict (for example on timeout).
    Unknown(String),
    /// The backend failed or returned something unreadable.
    Solver(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Parse { index, error } => write!(f, "Constraint {index}: {error}"),
            SolveError::NotPredicate { index } => {
                write!(f, "Constraint {index} is not a predicate")
            }
            SolveError::SortConflict(name) => {
                write!(f, "Variable '{name}' is used as both integer and boolean")
            }
            SolveError::MissingValue(name) => write!(f, "Missing value for variable '{name}'"),
            SolveError::Unknown(reason) => write!(f, "Solver returned unknown: {reason}"),
            SolveError::Solver(message) => write!(f, "Solver failure: {message}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}
