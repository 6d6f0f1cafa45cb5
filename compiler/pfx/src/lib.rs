//! Prefix expressions over `x`, `y`, `z`.
//!
//! # Architecture
//!
//! ```text
//! text ──► parse() ──► Expr ──► evaluate(bindings) ──► f64
//!                        │
//!                        └────► serialize(Flat | Prefix) ──► String
//! ```
//!
//! Trees can also be built directly with [`builder`], skipping the parser.
//!
//! ```
//! use pfx::{evaluate, parse, serialize, Notation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = parse("(* (+ x 1) (- y 2))")?;
//! assert_eq!(evaluate(&expr, &[3.0, 5.0, 0.0])?, 12.0);
//! assert_eq!(serialize(&expr, Notation::Flat), "x 1 + y 2 - *");
//! # Ok(())
//! # }
//! ```

use std::sync::Once;

pub use pfx_eval::{evaluate, EvalError, EvalResult};
pub use pfx_fmt::{serialize, serialize_into, Emitter, Notation, StringEmitter};
pub use pfx_ir::{
    builder, ArityMismatch, Expr, OperatorKind, Operation, UnknownVariable, Variable,
    VARIABLE_NAMES,
};
pub use pfx_parse::{parse, SyntaxError, SyntaxErrorKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=pfx_parse=trace` to log every group reduction.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
