//! Variable registry.
//!
//! Maps the three variable names to their evaluation-time binding slots.

use std::fmt;

/// Registered variable names, indexed by slot.
pub const VARIABLE_NAMES: [&str; 3] = ["x", "y", "z"];

/// A variable resolved to its binding slot.
///
/// Only constructible through [`Variable::from_name`] or [`Variable::from_slot`],
/// so the slot is always in `0..VARIABLE_NAMES.len()`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Variable {
    slot: u8,
}

impl Variable {
    /// Resolve a variable name. Returns `None` for unregistered names.
    pub fn from_name(name: &str) -> Option<Self> {
        VARIABLE_NAMES
            .iter()
            .position(|&known| known == name)
            .and_then(Self::from_slot)
    }

    /// Variable bound to `slot`, if such a slot exists.
    pub fn from_slot(slot: usize) -> Option<Self> {
        if slot < VARIABLE_NAMES.len() {
            u8::try_from(slot).ok().map(|slot| Variable { slot })
        } else {
            None
        }
    }

    /// Index into the bindings passed to evaluation.
    #[inline]
    pub fn slot(self) -> usize {
        usize::from(self.slot)
    }

    /// Source-level name.
    pub fn name(self) -> &'static str {
        VARIABLE_NAMES[self.slot()]
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not in the variable registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown variable '{0}'")]
pub struct UnknownVariable(pub String);
