//! Operator table.
//!
//! The operator vocabulary is closed: every token the parser accepts maps to
//! exactly one [`OperatorKind`], and every kind has a fixed arity. Adding an
//! operator means one new variant plus one arm in each table method below.
//!
//! `min3` and `max5` take a single operand. Their names suggest 3- and 5-ary
//! reductions, but the accepted grammar has always required exactly one.

use std::fmt;

/// Operators accepted in prefix expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorKind {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,

    // Functions
    ArcTangent,
    Exponent,
    Min3,
    Max5,
}

impl OperatorKind {
    /// Every operator, in table order.
    pub const ALL: [OperatorKind; 9] = [
        Self::Add,
        Self::Subtract,
        Self::Divide,
        Self::Multiply,
        Self::Negate,
        Self::ArcTangent,
        Self::Exponent,
        Self::Min3,
        Self::Max5,
    ];

    /// Source-level token, used both for parsing and serialization.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Negate => "negate",
            Self::ArcTangent => "atan",
            Self::Exponent => "exp",
            Self::Min3 => "min3",
            Self::Max5 => "max5",
        }
    }

    /// Required operand count.
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => 2,
            Self::Negate | Self::ArcTangent | Self::Exponent | Self::Min3 | Self::Max5 => 1,
        }
    }

    /// Look up a token (symbol or keyword).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "negate" => Some(Self::Negate),
            "atan" => Some(Self::ArcTangent),
            "exp" => Some(Self::Exponent),
            "min3" => Some(Self::Min3),
            "max5" => Some(Self::Max5),
            _ => None,
        }
    }

    /// Look up a single-character token.
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0; 4];
        Self::from_token(c.encode_utf8(&mut buf))
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
