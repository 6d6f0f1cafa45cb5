//! Expression tree.
//!
//! Trees are immutable once built. Operands are owned by their operation and
//! never shared, so a finished tree can be evaluated or serialized from any
//! number of threads without synchronization.

use std::fmt;
use std::hash::{Hash, Hasher};

use pfx_stack::ensure_sufficient_stack;

use crate::{OperatorKind, Variable};

/// Expression tree node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Integer literal.
    Const(i64),
    /// Reference to a binding slot.
    Variable(Variable),
    /// Operator applied to exactly `kind.arity()` operands.
    Operation(Operation),
}

/// An operator node. See [`Expr::operation`].
///
/// `Clone`, `PartialEq`, `Hash`, and `Debug` recurse through the operands,
/// so each is implemented by hand behind a stack guard.
pub struct Operation {
    kind: OperatorKind,
    operands: Vec<Expr>,
}

impl Operation {
    /// Caller guarantees `operands.len() == kind.arity()`.
    pub(crate) fn new_unchecked(kind: OperatorKind, operands: Vec<Expr>) -> Self {
        debug_assert_eq!(operands.len(), kind.arity(), "arity of {kind}");
        Operation { kind, operands }
    }

    #[inline]
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Operands in source (left-to-right) order.
    #[inline]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.operands.len()
    }
}

impl Clone for Operation {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Operation {
            kind: self.kind,
            operands: self.operands.clone(),
        })
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.kind == other.kind && self.operands == other.operands)
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            self.kind.hash(state);
            self.operands.hash(state);
        });
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Operation")
                .field("kind", &self.kind)
                .field("operands", &self.operands)
                .finish()
        })
    }
}

impl Drop for Operation {
    // Flattens nested operands into a worklist so dropping a deeply nested
    // tree does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(expr) = pending.pop() {
            if let Expr::Operation(mut op) = expr {
                pending.append(&mut op.operands);
            }
        }
    }
}

/// Operand count does not match the operator's arity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operator '{kind}' expects {expected} operands, found {found}")]
pub struct ArityMismatch {
    pub kind: OperatorKind,
    pub expected: usize,
    pub found: usize,
}

impl Expr {
    /// Build an operation node, validating the operand count.
    pub fn operation(kind: OperatorKind, operands: Vec<Expr>) -> Result<Expr, ArityMismatch> {
        let expected = kind.arity();
        if operands.len() == expected {
            Ok(Expr::Operation(Operation::new_unchecked(kind, operands)))
        } else {
            Err(ArityMismatch {
                kind,
                expected,
                found: operands.len(),
            })
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Expr::Const(_) | Expr::Variable(_) => 1,
            Expr::Operation(op) => 1 + op.operands().iter().map(Expr::depth).max().unwrap_or(0),
        })
    }

    /// Highest binding slot referenced, or `None` for variable-free trees.
    ///
    /// Evaluation needs at least `max_slot() + 1` bindings.
    pub fn max_slot(&self) -> Option<usize> {
        ensure_sufficient_stack(|| match self {
            Expr::Const(_) => None,
            Expr::Variable(var) => Some(var.slot()),
            Expr::Operation(op) => op.operands().iter().filter_map(Expr::max_slot).max(),
        })
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Variable(var)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Const(value)
    }
}
