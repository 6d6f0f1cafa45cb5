//! Stack safety for deep recursion.
//!
//! The parser builds trees iteratively, so nesting depth is bounded only by
//! input length. Evaluation and serialization walk those trees recursively;
//! wrapping each step in [`ensure_sufficient_stack`] grows the stack on demand
//! instead of overflowing on inputs like `(negate (negate (negate ...)))`.
//!
//! - **Native targets**: the `stacker` crate grows the stack.
//! - **WASM targets**: no-op passthrough.

/// Grow the stack once less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(expr: &Expr) -> usize {
///     ensure_sufficient_stack(|| match expr {
///         Expr::Operation(op) => 1 + op.operands().iter().map(depth).max().unwrap_or(0),
///         _ => 1,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
