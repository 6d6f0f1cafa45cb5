//! End-to-end scenarios through the public API.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pfx::builder::{add, constant, variable};
use pfx::{evaluate, init_tracing, parse, serialize, Notation, SyntaxErrorKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(source: &str, bindings: &[f64]) -> f64 {
    init_tracing();
    evaluate(&parse(source).unwrap(), bindings).unwrap()
}

fn error_kind(source: &str) -> SyntaxErrorKind {
    init_tracing();
    parse(source).unwrap_err().kind().clone()
}

#[test]
fn add_variable_and_constant() {
    assert_eq!(eval("(+ x 1)", &[2.0, 0.0, 0.0]), 3.0);
}

#[test]
fn nested_binary_operations() {
    assert_eq!(eval("(* (+ x 1) (- y 2))", &[3.0, 5.0, 0.0]), 12.0);
}

#[test]
fn bare_variable() {
    assert_eq!(eval("x", &[7.0, 0.0, 0.0]), 7.0);
}

#[test]
fn negate_constant() {
    assert_eq!(eval("(negate 5)", &[0.0, 0.0, 0.0]), -5.0);
}

#[test]
fn too_many_operands() {
    assert_eq!(
        error_kind("(+ 1 2 3)"),
        SyntaxErrorKind::TooManyOperands { expected: 2 }
    );
    assert!(parse("(+ 1 2 3)")
        .unwrap_err()
        .to_string()
        .starts_with("too many operands, expected 2"));
}

#[test]
fn missing_operand() {
    assert_eq!(error_kind("(+ 1)"), SyntaxErrorKind::MissingOperand);
}

#[test]
fn flat_and_prefix_output() {
    let expr = parse("(+ x y)").unwrap();
    assert_eq!(serialize(&expr, Notation::Flat), "x y +");
    assert_eq!(serialize(&expr, Notation::Prefix), "(+ x y)");
}

#[test]
fn boundary_errors() {
    assert_eq!(error_kind(""), SyntaxErrorKind::EmptyExpression);
    assert_eq!(error_kind(")"), SyntaxErrorKind::MissingClosingParenthesis);
    assert_eq!(error_kind("(x)"), SyntaxErrorKind::MissingOperator);
    assert_eq!(error_kind("("), SyntaxErrorKind::MissingClosingParenthesis);
}

#[test]
fn builder_and_parser_agree() {
    let built = add(variable("x").unwrap(), constant(1));
    assert_eq!(parse("(+ x 1)").unwrap(), built);
    assert_eq!(serialize(&built, Notation::Prefix), "(+ x 1)");
}

#[test]
fn error_is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(parse("(+ 1)").unwrap_err());
    assert_eq!(err.to_string(), "missing operand in (+ 1) at index 4");
}

proptest! {
    #[test]
    fn binary_operators_follow_arithmetic(
        op in prop::sample::select(vec!["+", "-", "*", "/"]),
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
    ) {
        let expected = match op {
            "+" => x + y,
            "-" => x - y,
            "*" => x * y,
            _ => x / y,
        };
        let actual = eval(&format!("({op} x y)"), &[x, y, 0.0]);
        prop_assert!(
            actual.to_bits() == expected.to_bits() || (actual.is_nan() && expected.is_nan())
        );
    }
}
