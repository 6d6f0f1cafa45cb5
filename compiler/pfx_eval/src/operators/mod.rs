//! Pure numeric functions behind each operator.
//!
//! Direct enum dispatch: the operator set is closed, so a match keeps every
//! operator's math in one place and lets the compiler check exhaustiveness.

use pfx_ir::OperatorKind;

/// Apply `kind` to already-evaluated operands.
///
/// Trees built through `pfx_ir` always supply `kind.arity()` operands. A
/// slice of the wrong length yields NaN; `min3`/`max5` reduce over any
/// non-empty slice.
pub(crate) fn apply(kind: OperatorKind, args: &[f64]) -> f64 {
    match (kind, args) {
        (OperatorKind::Add, [a, b]) => a + b,
        (OperatorKind::Subtract, [a, b]) => a - b,
        (OperatorKind::Multiply, [a, b]) => a * b,
        (OperatorKind::Divide, [a, b]) => a / b,
        (OperatorKind::Negate, [a]) => -a,
        (OperatorKind::ArcTangent, [a]) => a.atan(),
        (OperatorKind::Exponent, [a]) => a.exp(),
        (OperatorKind::Min3, [_, ..]) => reduce(args, f64::min, f64::INFINITY),
        (OperatorKind::Max5, [_, ..]) => reduce(args, f64::max, f64::NEG_INFINITY),
        _ => f64::NAN,
    }
}

/// Fold over all operands; NaN in any operand yields NaN.
fn reduce(args: &[f64], op: fn(f64, f64) -> f64, empty: f64) -> f64 {
    if args.iter().any(|arg| arg.is_nan()) {
        return f64::NAN;
    }
    args.iter().copied().reduce(op).unwrap_or(empty)
}
