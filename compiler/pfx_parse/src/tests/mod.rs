//! Parser tests.
//!
//! - `parser`: inputs that parse, and the trees they produce
//! - `errors`: every error kind, with the position it is reported at
