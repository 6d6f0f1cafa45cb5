//! Expression serializer.
//!
//! Two notations:
//!
//! - [`Notation::Flat`]: operands, then the operator token, separated by
//!   spaces and without parentheses (`(+ x (* y 2))` becomes `x y 2 * +`).
//! - [`Notation::Prefix`]: every operation fully parenthesized with the
//!   operator first, matching the input grammar.
//!
//! Prefix output always parses back to an equivalent tree.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction

pub mod emitter;

pub use emitter::{Emitter, StringEmitter};

use pfx_ir::Expr;
use pfx_stack::ensure_sufficient_stack;

/// Output notation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Notation {
    /// Operands first, operator last, no parentheses.
    Flat,
    /// `(<op> <operand>...)`, including the root.
    Prefix,
}

/// Serialize `expr` into a new string.
///
/// ```
/// use pfx_fmt::{serialize, Notation};
/// use pfx_ir::builder::{add, variable};
///
/// # fn main() -> Result<(), pfx_ir::UnknownVariable> {
/// let expr = add(variable("x")?, variable("y")?);
/// assert_eq!(serialize(&expr, Notation::Flat), "x y +");
/// assert_eq!(serialize(&expr, Notation::Prefix), "(+ x y)");
/// # Ok(())
/// # }
/// ```
pub fn serialize(expr: &Expr, notation: Notation) -> String {
    let mut emitter = StringEmitter::new();
    serialize_into(expr, notation, &mut emitter);
    emitter.output()
}

/// Serialize `expr` into an existing emitter.
pub fn serialize_into<E: Emitter>(expr: &Expr, notation: Notation, emitter: &mut E) {
    ensure_sufficient_stack(|| match expr {
        Expr::Const(value) => emitter.emit(&value.to_string()),
        Expr::Variable(var) => emitter.emit(var.name()),
        Expr::Operation(op) => match notation {
            Notation::Flat => {
                for operand in op.operands() {
                    serialize_into(operand, notation, emitter);
                    emitter.emit_space();
                }
                emitter.emit(op.kind().token());
            }
            Notation::Prefix => {
                emitter.emit("(");
                emitter.emit(op.kind().token());
                for operand in op.operands() {
                    emitter.emit_space();
                    serialize_into(operand, notation, emitter);
                }
                emitter.emit(")");
            }
        },
    });
}
