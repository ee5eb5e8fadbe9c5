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

//! Crate unit tests.

use super::*;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use z3::{Config, Context};

fn env(pairs: &[(&str, i64)]) -> Env {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

fn sample_env() -> Env {
    env(&[("x", 1), ("y", 2), ("z", 3)])
}

fn rendered(source: &str) -> String {
    render(&parse_expr(source).expect("parse should succeed"))
}

fn eval_ok(source: &str, env: &Env) -> Value {
    evaluate_str(source, env).expect("evaluation should succeed")
}

fn first_caret_column(pointer: &str) -> Option<usize> {
    pointer.chars().position(|ch| ch == '^').map(|idx| idx + 1)
}

fn assert_parse_error_case(case_name: &str, source: &str) {
    let err = parse_expr(source).expect_err("parse should fail");
    assert_eq!(err.line, 1, "{case_name}: unexpected error line");
    assert!(err.column > 0, "{case_name}: expected non-zero column");
    assert!(
        err.message.contains("Syntax error"),
        "{case_name}: unexpected message '{}'",
        err.message
    );
    assert_eq!(
        err.snippet, source,
        "{case_name}: snippet should match source line"
    );
    assert_eq!(
        first_caret_column(&err.pointer),
        Some(err.column),
        "{case_name}: caret column mismatch"
    );
}

#[test]
fn renders_canonical_forms() {
    assert_eq!(rendered("x = y"), "(x = y)");
    assert_eq!(rendered("x + 2 * y"), "(x + (2 * y))");
    assert_eq!(rendered("x < 2 and y < 1"), "((x < 2) and (y < 1))");
    assert_eq!(
        rendered("(x + 2*y < 15 + x * x) or z = 5"),
        "(((x + (2 * y)) < (15 + (x * x))) or (z = 5))"
    );
    assert_eq!(
        rendered("x + 2*y < 15 + x * x or z = 5"),
        "(((x + (2 * y)) < (15 + (x * x))) or (z = 5))"
    );
}

#[test]
fn binary_operators_group_to_the_right() {
    assert_eq!(rendered("x+y+z"), "(x + (y + z))");
    assert_eq!(rendered("x*y*z"), "(x * (y * z))");
    assert_eq!(
        rendered("a = 1 or b = 2 or c = 3"),
        "((a = 1) or ((b = 2) or (c = 3)))"
    );
    assert_eq!(
        rendered("a = 1 and b = 2 and c = 3"),
        "((a = 1) and ((b = 2) and (c = 3)))"
    );

    let expected = ArithExpr::add(
        ArithExpr::var("x"),
        ArithExpr::add(ArithExpr::var("y"), ArithExpr::var("z")),
    );
    assert_eq!(parse_arith("x + y + z"), Ok(expected));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(rendered("1 * 2 + 3"), "((1 * 2) + 3)");
    assert_eq!(rendered("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(rendered("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(eval_ok("x + 2 * y", &env(&[("x", 1), ("y", 2)])), Value::Int(5));
}

#[test]
fn and_binds_tighter_than_or() {
    let expr = parse_predicate("a = 1 or b = 2 and c = 3").expect("parse should succeed");
    let BoolExpr::Logic { op, left, right } = expr else {
        panic!("expected a logical node");
    };
    assert_eq!(op, LogicOp::Or);
    assert_eq!(*left, BoolExpr::eq(ArithExpr::var("a"), ArithExpr::constant(1)));
    assert!(matches!(
        *right,
        BoolExpr::Logic {
            op: LogicOp::And,
            ..
        }
    ));
}

#[test]
fn parenthesized_predicates_and_operands() {
    assert_eq!(rendered("((x + 1) = 2)"), "((x + 1) = 2)");
    assert_eq!(rendered("(x = 1) and (y < 2)"), "((x = 1) and (y < 2))");
    assert_eq!(
        rendered("((x = 1 or y = 2)) and z < 3"),
        "(((x = 1) or (y = 2)) and (z < 3))"
    );
}

#[test]
fn combined_grammar_falls_back_to_arithmetic() {
    assert_eq!(parse_expr("x"), Ok(Expr::Arith(ArithExpr::var("x"))));
    assert_eq!(parse_expr("  42 "), Ok(Expr::Arith(ArithExpr::constant(42))));
    assert!(matches!(parse_expr("1 + x"), Ok(Expr::Arith(_))));
    assert!(matches!(parse_expr("1 < x"), Ok(Expr::Bool(_))));
}

#[test]
fn sub_grammar_entry_points_run_to_completion() {
    assert!(parse_arith("x = 1").is_err());
    assert!(parse_predicate("x + 1").is_err());
    assert_eq!(
        parse_predicate("x < 1"),
        Ok(BoolExpr::lt(ArithExpr::var("x"), ArithExpr::constant(1)))
    );
}

#[test]
fn keywords_are_not_identifiers() {
    assert!(parse_expr("and = 1").is_err());
    assert!(parse_expr("or").is_err());
    // Words that merely start with a keyword are ordinary identifiers.
    assert_eq!(rendered("order = 1"), "(order = 1)");
    assert_eq!(rendered("x = 1 or android < 2"), "((x = 1) or (android < 2))");
    assert!(parse_expr("x = 1 ory = 2").is_err());
}

#[test]
fn identifiers_and_literals() {
    assert_eq!(rendered("x1 + _tmp * 007"), "(x1 + (_tmp * 7))");
    // Does not fit in i64.
    assert!(parse_expr("99999999999999999999").is_err());
    assert!(parse_expr("-1").is_err());
}

#[test]
fn accepts_unicode_identifiers() {
    assert_eq!(rendered("é = 1"), "(é = 1)");
    assert_eq!(rendered("größe + 2 * δ"), "(größe + (2 * δ))");
    assert_eq!(
        eval_ok("größe + 2 * δ", &env(&[("größe", 1), ("δ", 4)])),
        Value::Int(9)
    );
    assert_eq!(rendered("orné = 1"), "(orné = 1)");
    // A keyword followed by any identifier character is not a keyword.
    assert!(parse_expr("x = 1 oré = 2").is_err());
}

#[test]
fn parses_deep_nesting_without_blowup() {
    let depth = 30;
    let open = "(".repeat(depth);
    let close = ")".repeat(depth);
    let cases = vec![
        (format!("{open}x{close}"), "x"),
        (format!("{open}x = 1{close}"), "(x = 1)"),
        (format!("{open}x{close} < 1"), "(x < 1)"),
        (format!("{open}x + 1{close} * 2"), "((x + 1) * 2)"),
        (
            format!("{open}x = 1 and y < 2{close} or z = 3"),
            "(((x = 1) and (y < 2)) or (z = 3))",
        ),
    ];

    let started = Instant::now();
    for (source, expected) in &cases {
        assert_eq!(rendered(source), *expected, "nested input '{source}'");
    }
    let unclosed = format!("{open}x = 1");
    assert!(parse_expr(&unclosed).is_err());
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "nested parses took {:?}",
        started.elapsed()
    );
}

#[test]
fn names_the_expected_rule_when_nothing_parses() {
    let cases = vec![
        ("empty input", ""),
        ("whitespace only", "   "),
        ("literal out of range", "99999999999999999999"),
        ("non-alphabetic start", "€"),
        ("lone operator", "+ 1"),
    ];
    for (case_name, source) in cases {
        let err = parse_expr(source).expect_err("parse should fail");
        assert_eq!(
            err.message, "Syntax error: expected expression",
            "{case_name}: unexpected message"
        );
        assert!(!err.message.contains("Alt"), "{case_name}");
    }

    let err = parse_expr("   ").expect_err("parse should fail");
    assert_eq!(err.column, 4);

    assert_eq!(
        parse_arith("").map_err(|err| err.message),
        Err("Syntax error: expected arithmetic expression".to_string())
    );
    assert_eq!(
        parse_predicate("x").map_err(|err| err.message),
        Err("Syntax error: expected predicate".to_string())
    );
}

#[test]
fn reports_dangling_operator() {
    let err = parse_expr("x + ").expect_err("parse should fail");
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 3);
    assert_eq!(err.snippet, "x + ");
    assert_eq!(first_caret_column(&err.pointer), Some(3));
    assert!(err.to_string().contains("line 1, column 3"));
}

#[test]
fn reports_parse_errors_for_invalid_forms() {
    let cases = vec![
        ("empty input", ""),
        ("dangling plus", "x +"),
        ("dangling times", "2 *"),
        ("dangling or", "x = 1 or"),
        ("dangling and", "x = 1 and"),
        ("unclosed paren", "(x + 1"),
        ("unopened paren", "x + 1)"),
        ("chained comparison", "1 < 2 < 3"),
        ("missing comparison operand", "x ="),
        ("logic over arithmetic", "x and y"),
        ("juxtaposed atoms", "x y"),
        ("unknown symbol", "x - y"),
    ];
    for (case_name, source) in cases {
        assert_parse_error_case(case_name, source);
    }
}

#[test]
fn evaluates_reference_examples() {
    let env = sample_env();
    assert_eq!(eval_ok("x = y", &env), Value::Bool(false));
    assert_eq!(eval_ok("x + 2 * y", &env), Value::Int(5));
    assert_eq!(eval_ok("x < 2 and y < 1", &env), Value::Bool(false));
    assert_eq!(
        eval_ok("(x + 2*y < 15 + x * x) or z = 5", &env),
        Value::Bool(true)
    );
    assert_eq!(
        eval_ok("x + 2*y < 15 + x * x or z = 5", &env),
        Value::Bool(true)
    );
    assert_eq!(eval_ok("x * 2 + 3 < x * (2 + 3)", &env), Value::Bool(false));
    assert_eq!(eval_ok("y * 2 + 3 < y * (2 + 3)", &env), Value::Bool(true));
}

#[test]
fn reports_unbound_variables() {
    let err = evaluate_str("w + 1", &env(&[("x", 1)])).expect_err("w is unbound");
    assert_eq!(
        err,
        ExprError::Eval(EvalError::UnboundVariable("w".to_string()))
    );
    assert_eq!(err.to_string(), "Unbound variable 'w'");

    // Both sides of a connective are evaluated.
    let err = evaluate_str("x = 2 and w = 1", &env(&[("x", 1)])).expect_err("w is unbound");
    assert_eq!(
        err,
        ExprError::Eval(EvalError::UnboundVariable("w".to_string()))
    );
}

#[test]
fn evaluate_str_surfaces_parse_errors() {
    let err = evaluate_str("x + ", &sample_env()).expect_err("parse should fail");
    assert!(matches!(err, ExprError::Parse(_)));
}

#[test]
fn reports_overflow() {
    let big = env(&[("m", i64::MAX)]);
    assert_eq!(
        evaluate_str("m + 1", &big),
        Err(ExprError::Eval(EvalError::Overflow {
            op: ArithOp::Add,
            left: i64::MAX,
            right: 1,
        }))
    );
    assert!(matches!(
        evaluate_str("m * 2", &big),
        Err(ExprError::Eval(EvalError::Overflow {
            op: ArithOp::Mul,
            ..
        }))
    ));
}

#[test]
fn boolean_variables_read_the_environment() {
    let expr = Expr::Bool(BoolExpr::and(
        BoolExpr::var("p"),
        BoolExpr::lt(ArithExpr::var("x"), ArithExpr::constant(3)),
    ));
    assert_eq!(
        evaluate(&expr, &env(&[("p", 1), ("x", 2)])),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate(&expr, &env(&[("p", 0), ("x", 2)])),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        evaluate(&expr, &env(&[("x", 2)])),
        Err(EvalError::UnboundVariable("p".to_string()))
    );
    assert_eq!(expr.to_string(), "(p and (x < 3))");
}

#[test]
fn operator_sugar_builds_binary_nodes() {
    let built = ArithExpr::var("x") + ArithExpr::constant(2) * ArithExpr::var("y");
    assert_eq!(parse_arith("x + 2 * y"), Ok(built));
}

#[test]
fn equality_is_structural() {
    assert_eq!(parse_expr("x + (1)"), parse_expr("(x) + 1"));
    assert_ne!(parse_expr("x + 1"), parse_expr("1 + x"));
    assert_ne!(parse_expr("x * 1"), parse_expr("x + 1"));
    assert_ne!(
        Expr::Arith(ArithExpr::var("x")),
        Expr::Bool(BoolExpr::var("x"))
    );
}

#[test]
fn collects_free_variables() {
    let expr = parse_arith("x + y * x + 3").expect("parse should succeed");
    let names: BTreeSet<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
    assert_eq!(expr.free_vars(), names);
    assert!(ArithExpr::constant(3).free_vars().is_empty());

    let pred = BoolExpr::or(
        BoolExpr::var("p"),
        BoolExpr::eq(ArithExpr::var("z"), ArithExpr::var("z")),
    );
    let names: BTreeSet<String> = ["p", "z"].iter().map(|s| s.to_string()).collect();
    assert_eq!(Expr::Bool(pred).free_vars(), names);
}

#[test]
fn rendering_reparses_to_equal_tree() {
    let sources = [
        "x = y",
        "x + 2 * y",
        "x < 2 and y < 1",
        "(x + 2*y < 15 + x * x) or z = 5",
        "((a + b) * (c + d)) * e",
        "a = 1 or (b = 2 or c = 3) and d < 4",
    ];
    for source in sources {
        let expr = parse_expr(source).expect("parse should succeed");
        let again = parse_expr(&render(&expr)).expect("rendering should reparse");
        assert_eq!(again, expr, "round trip changed '{source}'");
    }
}

#[test]
fn lowerer_shares_variables_by_name() {
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let mut lowerer = Lowerer::new(&ctx);

    let first = parse_expr("x + y = 3").expect("parse should succeed");
    let second = parse_expr("x < 2 * z").expect("parse should succeed");
    assert!(matches!(lowerer.lower(&first), Ok(Term::Bool(_))));
    assert!(matches!(lowerer.lower(&second), Ok(Term::Bool(_))));
    assert!(matches!(
        lowerer.lower(&parse_expr("x * 2").expect("parse should succeed")),
        Ok(Term::Int(_))
    ));

    let names: Vec<&str> = lowerer.int_vars().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["x", "y", "z"]);
    assert!(lowerer.bool_vars().is_empty());

    assert_eq!(
        lowerer.bool_var("x").map(|_| ()),
        Err(SolveError::SortConflict("x".to_string()))
    );
}

#[test]
fn detects_unsatisfiable_constraints() {
    let outcome = solve(&["x + y +z = 10", "x < y", "x < 3", "5 < x"]).expect("solve should run");
    assert_eq!(outcome, SolveOutcome::Unsatisfiable);
    assert!(outcome.is_unsatisfiable());
    assert!(outcome.assignment().is_none());
}

#[test]
fn finds_witnessing_assignment() {
    let outcome = solve(&["x = 2", "y = 3", "x < y"]).expect("solve should run");
    let assignment = outcome.assignment().expect("constraints are satisfiable");
    assert_eq!(assignment.int("x"), Ok(2));
    assert_eq!(assignment.int("y"), Ok(3));
    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment.to_string(), "[x = 2, y = 3]");
    assert_eq!(
        assignment.int("w"),
        Err(SolveError::MissingValue("w".to_string()))
    );
}

#[test]
fn assignment_satisfies_every_constraint() {
    let sources = ["x + y + z = 10", "x < y", "y < z", "0 < x", "x * 2 < 5 or z = 9"];
    let outcome = solve(&sources).expect("solve should run");
    let assignment = outcome.assignment().expect("constraints are satisfiable");
    assert_eq!(assignment.len(), 3);
    for source in sources {
        let expr = parse_expr(source).expect("parse should succeed");
        assert_eq!(assignment.check(&expr), Ok(Value::Bool(true)), "{source}");
    }
}

#[test]
fn empty_constraint_set_is_satisfiable() {
    let outcome = solve(&[]).expect("solve should run");
    assert!(outcome.assignment().is_some_and(Assignment::is_empty));
}

#[test]
fn solve_reports_errors_by_constraint_index() {
    let err = solve(&["x = 1", "x + "]).expect_err("second constraint is malformed");
    let SolveError::Parse { index, error } = err else {
        panic!("expected a parse error");
    };
    assert_eq!(index, 1);
    assert_eq!(error.column, 3);

    assert_eq!(
        solve(&["x = 1", "x + 1"]),
        Err(SolveError::NotPredicate { index: 1 })
    );
}

#[test]
fn solves_boolean_variables() {
    let x = || ArithExpr::var("x");
    let constraints = vec![
        Expr::Bool(BoolExpr::or(
            BoolExpr::var("p"),
            BoolExpr::eq(x(), ArithExpr::constant(1)),
        )),
        Expr::Bool(BoolExpr::lt(x(), ArithExpr::constant(0))),
    ];
    let outcome = solve_exprs(&constraints, &SolveOptions::new()).expect("solve should run");
    let assignment = outcome.assignment().expect("constraints are satisfiable");
    assert_eq!(assignment.boolean("p"), Ok(true));
    assert!(assignment.int("x").is_ok_and(|v| v < 0));

    let conflicting = vec![
        Expr::Bool(BoolExpr::var("x")),
        Expr::Bool(BoolExpr::eq(x(), ArithExpr::constant(1))),
    ];
    assert_eq!(
        solve_exprs(&conflicting, &SolveOptions::new()),
        Err(SolveError::SortConflict("x".to_string()))
    );
}

#[test]
fn options_pin_values_and_bound_time() {
    let options = SolveOptions::new()
        .with_timeout(Duration::from_secs(30))
        .fix_int("x", 7);
    assert_eq!(options.timeout(), Some(Duration::from_secs(30)));

    let outcome = solve_with_options(&["x < y"], &options).expect("solve should run");
    let assignment = outcome.assignment().expect("constraints are satisfiable");
    assert_eq!(assignment.int("x"), Ok(7));
    assert!(assignment.int("y").is_ok_and(|y| y > 7));

    let pinned = SolveOptions::new().fix_int("x", 1);
    assert_eq!(
        solve_with_options(&["5 < x"], &pinned),
        Ok(SolveOutcome::Unsatisfiable)
    );
}
