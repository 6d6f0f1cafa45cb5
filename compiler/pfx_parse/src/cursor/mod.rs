//! Character cursor over the parse input.
//!
//! Scanning is ad hoc: the parser asks the cursor for a number, an
//! identifier, or a single character depending on what it expects next,
//! rather than tokenizing up front. Positions are byte offsets.

use crate::{SyntaxError, SyntaxErrorKind};

/// ASCII letters, digits, and `_`.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Cursor over the input string.
///
/// Copyable, so callers can snapshot and restore a position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The complete input.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Character at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Move past the current character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance past any run of whitespace.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Build an error at the current position.
    pub fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        self.error_at(kind, self.pos)
    }

    /// Build an error at an explicit position.
    pub fn error_at(&self, kind: SyntaxErrorKind, position: usize) -> SyntaxError {
        SyntaxError::new(kind, position, self.source)
    }

    /// Read an identifier: an ASCII letter followed by word characters.
    ///
    /// Fails with `IncorrectIdentifier` (cursor unmoved) if the current
    /// character cannot start one.
    pub fn read_identifier(&mut self) -> Result<&'a str, SyntaxError> {
        match self.current() {
            Some(c) if c.is_ascii_alphabetic() => Ok(self.eat_while(is_word_char)),
            other => Err(self.error(SyntaxErrorKind::IncorrectIdentifier(
                other.unwrap_or('\0'),
            ))),
        }
    }

    /// Read an integer literal with an optional leading `-`.
    ///
    /// Returns `Ok(None)` without moving if no digits follow. A lone `-` is
    /// left in place so it can be read as an operator instead.
    pub fn read_number(&mut self) -> Result<Option<i64>, SyntaxError> {
        let start = self.pos;
        if self.current() == Some('-') {
            self.advance();
        }
        if self.eat_while(|c| c.is_ascii_digit()).is_empty() {
            self.pos = start;
            return Ok(None);
        }
        self.source[start..self.pos]
            .parse()
            .map(Some)
            .map_err(|_| self.error_at(SyntaxErrorKind::NumberOutOfRange, start))
    }

    /// Consume characters while `pred` holds and return them.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }
}
