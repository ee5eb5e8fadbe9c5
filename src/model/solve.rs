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

//! Solver session: parse, lower, assert, check, read back a model.

use crate::ast::{Expr, Value};
use crate::parser::parse_expr_source;
use std::collections::BTreeMap;
use tracing::{debug, trace};
use z3::ast::{Ast, Int};
use z3::{Config, Context, Model, Params, SatResult, Solver};

use super::{Assignment, Lowerer, SolveError, SolveOptions, SolveOutcome, Term};

/// Parses every constraint, then solves them together.
///
/// Syntax errors are reported before any solver state is created.
pub(crate) fn solve_sources(
    sources: &[&str],
    options: &SolveOptions,
) -> Result<SolveOutcome, SolveError> {
    let mut constraints = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        let expr = parse_expr_source(source).map_err(|error| SolveError::Parse { index, error })?;
        constraints.push(expr);
    }
    solve_exprs(&constraints, options)
}

/// Asserts every constraint into one fresh solver session and checks it.
///
/// The session is released when this call returns.
pub(crate) fn solve_exprs(
    constraints: &[Expr],
    options: &SolveOptions,
) -> Result<SolveOutcome, SolveError> {
    debug!(
        constraints = constraints.len(),
        timeout_ms = ?options.timeout_ms(),
        fixed = options.fixed.len(),
        "starting solve session"
    );

    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let solver = Solver::new(&ctx);

    if let Some(ms) = options.timeout_ms() {
        let mut params = Params::new(&ctx);
        params.set_u32("timeout", ms);
        solver.set_params(&params);
    }

    let mut lowerer = Lowerer::new(&ctx);
    for (index, constraint) in constraints.iter().enumerate() {
        let Term::Bool(term) = lowerer.lower(constraint)? else {
            return Err(SolveError::NotPredicate { index });
        };
        trace!(index, %constraint, "asserting constraint");
        solver.assert(&term);
    }
    for (name, value) in &options.fixed {
        let var = lowerer.int_var(name)?;
        trace!(name = name.as_str(), value, "pinning variable");
        solver.assert(&var._eq(&Int::from_i64(&ctx, *value)));
    }

    let outcome = match solver.check() {
        SatResult::Sat => {
            let model = solver
                .get_model()
                .ok_or_else(|| SolveError::Solver("no model available".to_string()))?;
            SolveOutcome::Satisfiable(extract_assignment(&model, &lowerer)?)
        }
        SatResult::Unsat => SolveOutcome::Unsatisfiable,
        SatResult::Unknown => {
            let reason = solver
                .get_reason_unknown()
                .unwrap_or_else(|| "unknown".to_string());
            debug!(%reason, "solve session inconclusive");
            return Err(SolveError::Unknown(reason));
        }
    };

    debug!(
        satisfiable = outcome.is_satisfiable(),
        "solve session finished"
    );
    Ok(outcome)
}

/// Reads one value per declared variable, completing the model where the
/// solver left a variable unconstrained.
fn extract_assignment<'ctx>(
    model: &Model<'ctx>,
    lowerer: &Lowerer<'ctx>,
) -> Result<Assignment, SolveError> {
    let mut values = BTreeMap::new();

    for (name, var) in lowerer.int_vars() {
        let value = model
            .eval(var, true)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| SolveError::Solver(format!("no i64 value for '{name}' in model")))?;
        values.insert(name.clone(), Value::Int(value));
    }
    for (name, var) in lowerer.bool_vars() {
        let value = model
            .eval(var, true)
            .and_then(|v| v.as_bool())
            .ok_or_else(|| SolveError::Solver(format!("no boolean value for '{name}' in model")))?;
        values.insert(name.clone(), Value::Bool(value));
    }

    Ok(Assignment { values })
}
