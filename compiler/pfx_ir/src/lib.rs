//! Prefix IR - Expression Tree Types
//!
//! Core data structures shared by the parser, evaluator, and serializer:
//! - [`Variable`] and the fixed variable registry (`x`, `y`, `z`)
//! - [`OperatorKind`] and its side table (token, arity)
//! - [`Expr`], the immutable expression tree
//! - [`builder`], constructor functions for building trees without parsing
//!
//! # Invariants
//!
//! Every [`Operation`] holds exactly `kind.arity()` operands. The only way to
//! obtain one is [`Expr::operation`] (checked) or the [`builder`] functions
//! (arity fixed by their signatures), so evaluation and serialization never
//! re-validate arity.

pub mod builder;
mod expr;
mod operator;
mod variable;

pub use expr::{ArityMismatch, Expr, Operation};
pub use operator::OperatorKind;
pub use variable::{UnknownVariable, Variable, VARIABLE_NAMES};
