//! Evaluator for prefix expression trees.
//!
//! Evaluation is a pure function of the tree and the bindings: operands are
//! evaluated left to right, then the operator's numeric function is applied.
//! Arithmetic is IEEE 754 double precision throughout, so division by zero
//! yields an infinity or NaN rather than an error. The only failure is a
//! variable whose slot has no binding.

mod operators;

use operators::apply;
use pfx_ir::Expr;
use pfx_stack::ensure_sufficient_stack;

/// Evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("variable slot {slot} is out of range for {len} bindings")]
    OutOfRange { slot: usize, len: usize },
}

pub type EvalResult = Result<f64, EvalError>;

/// Evaluate `expr` with `bindings[slot]` as the value of each variable.
#[tracing::instrument(level = "debug", skip_all, fields(bindings = bindings.len()))]
pub fn evaluate(expr: &Expr, bindings: &[f64]) -> EvalResult {
    eval_expr(expr, bindings)
}

fn eval_expr(expr: &Expr, bindings: &[f64]) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Const(value) => Ok(const_value(*value)),
        Expr::Variable(var) => {
            bindings
                .get(var.slot())
                .copied()
                .ok_or(EvalError::OutOfRange {
                    slot: var.slot(),
                    len: bindings.len(),
                })
        }
        Expr::Operation(op) => {
            let args = op
                .operands()
                .iter()
                .map(|operand| eval_expr(operand, bindings))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(apply(op.kind(), &args))
        }
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "literals above 2^53 round like any other double"
)]
#[inline]
fn const_value(value: i64) -> f64 {
    value as f64
}
