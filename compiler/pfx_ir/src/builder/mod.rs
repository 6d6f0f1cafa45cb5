//! Tree construction without parsing.
//!
//! One function per operator, with the operator's arity fixed by the
//! signature. Trees built here are indistinguishable from parsed ones.
//!
//! ```
//! use pfx_ir::builder::{add, constant, multiply, variable};
//!
//! # fn main() -> Result<(), pfx_ir::UnknownVariable> {
//! // (* (+ x 1) y)
//! let expr = multiply(add(variable("x")?, constant(1)), variable("y")?);
//! assert_eq!(expr.max_slot(), Some(1));
//! # Ok(())
//! # }
//! ```

use crate::{Expr, OperatorKind, Operation, UnknownVariable, Variable};

fn unary(kind: OperatorKind, operand: Expr) -> Expr {
    Expr::Operation(Operation::new_unchecked(kind, vec![operand]))
}

fn binary(kind: OperatorKind, left: Expr, right: Expr) -> Expr {
    Expr::Operation(Operation::new_unchecked(kind, vec![left, right]))
}

pub fn constant(value: i64) -> Expr {
    Expr::Const(value)
}

/// Variable by name; only `x`, `y`, `z` are registered.
pub fn variable(name: &str) -> Result<Expr, UnknownVariable> {
    Variable::from_name(name)
        .map(Expr::Variable)
        .ok_or_else(|| UnknownVariable(name.to_owned()))
}

pub fn add(left: Expr, right: Expr) -> Expr {
    binary(OperatorKind::Add, left, right)
}

pub fn subtract(left: Expr, right: Expr) -> Expr {
    binary(OperatorKind::Subtract, left, right)
}

pub fn multiply(left: Expr, right: Expr) -> Expr {
    binary(OperatorKind::Multiply, left, right)
}

pub fn divide(left: Expr, right: Expr) -> Expr {
    binary(OperatorKind::Divide, left, right)
}

pub fn negate(operand: Expr) -> Expr {
    unary(OperatorKind::Negate, operand)
}

pub fn atan(operand: Expr) -> Expr {
    unary(OperatorKind::ArcTangent, operand)
}

pub fn exp(operand: Expr) -> Expr {
    unary(OperatorKind::Exponent, operand)
}

pub fn min3(operand: Expr) -> Expr {
    unary(OperatorKind::Min3, operand)
}

pub fn max5(operand: Expr) -> Expr {
    unary(OperatorKind::Max5, operand)
}
