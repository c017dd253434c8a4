//! Token types for the Python scanner.

use std::fmt;

/// A single token with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub col: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, col: u32) -> Self {
        Self { kind, line, col }
    }

    /// Returns `true` if this is the identifier `name`.
    pub fn is_name(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Name(n) if n == name)
    }

    /// Returns `true` if this is the operator or delimiter `op`.
    pub fn is_op(&self, op: &str) -> bool {
        matches!(&self.kind, TokenKind::Op(o) if o == op)
    }

    /// The identifier text, if this is a name.
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Name(n) => Some(n),
            _ => None,
        }
    }

    /// The decoded text, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Token kinds. Comments and indentation are not tokens; callers use
/// [`Token::col`] of the first token on a logical line to tell nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Name(String),
    /// String literal, already decoded.
    Str(String),
    /// Numeric literal, verbatim.
    Number(String),
    /// Operator or delimiter.
    Op(String),
    /// End of a logical line.
    Newline,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Op(o) => write!(f, "{o}"),
            Self::Newline => write!(f, "NEWLINE"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}
