//! Parser for fully parenthesized prefix expressions.
//!
//! ```text
//! expr  = number | variable | "(" op expr* ")"
//! op    = "+" | "-" | "*" | "/" | "negate" | "atan" | "exp" | "min3" | "max5"
//! ```
//!
//! A single left-to-right pass pushes open markers, operator tokens, and
//! finished subtrees onto a working stack. Each `)` reduces everything above
//! the innermost open marker into one operation node, checking the operand
//! count against the operator table. There is no recursion, so nesting depth
//! is limited only by memory.
//!
//! Scanning decisions are made one character at a time: `(` and `)` are
//! structural, a digit or `-digit` starts a literal, a lone `-` or other
//! symbol is an operator, and a word is an operator keyword or a variable.

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::{SyntaxError, SyntaxErrorKind};

use pfx_ir::{Expr, OperatorKind, Variable};
use tracing::{debug, trace};

/// Parse `input` into an expression tree.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    let result = Parser::new(input).parse();
    if let Err(err) = &result {
        debug!(kind = ?err.kind(), position = err.position(), "parse failed");
    }
    result
}

/// Working stack entry.
enum Frame {
    Open,
    Operator(OperatorKind),
    Value(Expr),
}

/// Whether the scan loop should keep going.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Step {
    Continue,
    /// The outermost expression is finished; only trailing text remains.
    Complete,
}

/// Parser state for a single input.
///
/// Consumed by [`Parser::parse`]; nothing carries over between inputs.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    stack: Vec<Frame>,
    /// Number of currently open groups.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(input),
            stack: Vec::new(),
            depth: 0,
        }
    }

    #[inline]
    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        self.cursor.error(kind)
    }

    /// Run the scan loop and validate what is left on the stack.
    pub fn parse(mut self) -> Result<Expr, SyntaxError> {
        if self.cursor.source().is_empty() {
            return Err(self.error(SyntaxErrorKind::EmptyExpression));
        }
        self.cursor.skip_whitespace();
        while let Some(c) = self.cursor.current() {
            let step = match c {
                ')' => self.close_group()?,
                '(' => self.open_group(),
                _ => self.atom()?,
            };
            if step == Step::Complete {
                break;
            }
            self.cursor.skip_whitespace();
        }
        self.finish()
    }

    fn open_group(&mut self) -> Step {
        self.stack.push(Frame::Open);
        self.cursor.advance();
        self.depth += 1;
        Step::Continue
    }

    /// Reduce the innermost group at a `)`.
    fn close_group(&mut self) -> Result<Step, SyntaxError> {
        if self.depth == 0 {
            return Err(self.error(SyntaxErrorKind::MissingClosingParenthesis));
        }
        self.depth -= 1;

        // Operands come off the stack last-first.
        let mut operands = Vec::new();
        let kind = loop {
            match self.stack.pop() {
                Some(Frame::Value(expr)) => operands.push(expr),
                Some(Frame::Operator(kind)) => break kind,
                Some(Frame::Open) | None => {
                    return Err(self.error(SyntaxErrorKind::MissingOperator));
                }
            }
        };
        if !matches!(self.stack.pop(), Some(Frame::Open)) {
            return Err(self.error(SyntaxErrorKind::MissingParenthesis));
        }
        operands.reverse();

        let expr = Expr::operation(kind, operands).map_err(|mismatch| {
            if mismatch.found > mismatch.expected {
                self.error(SyntaxErrorKind::TooManyOperands {
                    expected: mismatch.expected,
                })
            } else {
                self.error(SyntaxErrorKind::MissingOperand)
            }
        })?;
        trace!(operator = %kind, depth = self.depth, "reduced group");
        self.stack.push(Frame::Value(expr));
        self.cursor.advance();

        Ok(if self.depth == 0 {
            Step::Complete
        } else {
            Step::Continue
        })
    }

    /// Scan a literal, operator token, or variable.
    fn atom(&mut self) -> Result<Step, SyntaxError> {
        if let Some(value) = self.cursor.read_number()? {
            self.stack.push(Frame::Value(Expr::Const(value)));
            return Ok(Step::Continue);
        }

        if let Some(kind) = self.cursor.current().and_then(OperatorKind::from_char) {
            self.cursor.advance();
            self.stack.push(Frame::Operator(kind));
            return Ok(Step::Continue);
        }

        let ident = self.cursor.read_identifier()?;
        if let Some(kind) = OperatorKind::from_token(ident) {
            self.stack.push(Frame::Operator(kind));
            Ok(Step::Continue)
        } else if let Some(var) = Variable::from_name(ident) {
            self.stack.push(Frame::Value(Expr::Variable(var)));
            // A bare variable is a complete expression on its own.
            Ok(if self.depth == 0 {
                Step::Complete
            } else {
                Step::Continue
            })
        } else {
            // Reported at the identifier's last character.
            let last = ident.chars().next_back().unwrap_or_default();
            let position = self.cursor.position() - last.len_utf8();
            Err(self.cursor.error_at(
                SyntaxErrorKind::IncorrectIdentifier(last),
                position,
            ))
        }
    }

    /// Post-loop validation: trailing text, leftover values, open groups.
    fn finish(mut self) -> Result<Expr, SyntaxError> {
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(self.error(SyntaxErrorKind::UnknownEnding));
        }
        // Only completed subtrees count as leftover values, so an unclosed
        // group such as "(+ 1", "((" or "(x" falls through to
        // MissingClosingParenthesis rather than IncorrectParenthesisPlacement.
        let values = self
            .stack
            .iter()
            .filter(|frame| matches!(frame, Frame::Value(_)))
            .count();
        if values > 1 {
            return Err(self.error(SyntaxErrorKind::IncorrectParenthesisPlacement));
        }
        if self.depth > 0 {
            return Err(self.error(SyntaxErrorKind::MissingClosingParenthesis));
        }
        match self.stack.pop() {
            Some(Frame::Value(expr)) if self.stack.is_empty() => Ok(expr),
            None => Err(self.error(SyntaxErrorKind::EmptyExpression)),
            // An operator token outside any group.
            Some(_) => Err(self.error(SyntaxErrorKind::MissingParenthesis)),
        }
    }
}

#[cfg(test)]
mod tests;
