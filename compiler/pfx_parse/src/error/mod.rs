//! Parse error types.
//!
//! Every failure is a [`SyntaxError`]: a [`SyntaxErrorKind`] plus the byte
//! offset the cursor had reached when parsing stopped. Parsing never yields a
//! partial tree, so the error is the whole result.

use std::fmt;

/// Why parsing stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Input is empty or whitespace only.
    EmptyExpression,
    /// A token that is neither a number, operator, nor registered variable.
    /// Carries the offending character (`'\0'` at end of input).
    IncorrectIdentifier(char),
    /// Unbalanced parentheses: a `)` with no open group, or input ended
    /// inside a group.
    MissingClosingParenthesis,
    /// A group closed without an operator token.
    MissingOperator,
    /// The operator of a group is not directly after its `(`.
    MissingParenthesis,
    /// A group has more operands than its operator's arity.
    TooManyOperands { expected: usize },
    /// A group has fewer operands than its operator's arity.
    MissingOperand,
    /// Non-whitespace text after a complete expression.
    UnknownEnding,
    /// More than one completed expression left at the end.
    IncorrectParenthesisPlacement,
    /// An integer literal that does not fit in 64 bits.
    NumberOutOfRange,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExpression => f.write_str("empty expression"),
            Self::IncorrectIdentifier('\0') => f.write_str("incorrect identifier at end of input"),
            Self::IncorrectIdentifier(found) => write!(f, "incorrect identifier '{found}'"),
            Self::MissingClosingParenthesis => f.write_str("missing closing parenthesis"),
            Self::MissingOperator => f.write_str("missing operator"),
            Self::MissingParenthesis => f.write_str("missing parenthesis"),
            Self::TooManyOperands { expected } => {
                write!(f, "too many operands, expected {expected}")
            }
            Self::MissingOperand => f.write_str("missing operand"),
            Self::UnknownEnding => f.write_str("unknown ending of correct expression"),
            Self::IncorrectParenthesisPlacement => f.write_str("incorrect parenthesis placement"),
            Self::NumberOutOfRange => f.write_str("integer literal out of range"),
        }
    }
}

/// A malformed expression.
///
/// Displays as `<reason> in <input> at index <position>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} in {input} at index {position}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    position: usize,
    input: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: usize, input: &str) -> Self {
        SyntaxError {
            kind,
            position,
            input: input.to_owned(),
        }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Byte offset into the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The complete text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests;
