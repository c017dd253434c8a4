//! Python scanner: source text to a flat token stream.
//!
//! Covers the subset of the grammar that generated bot programs use:
//! - names, numbers, operators and delimiters
//! - string literals of every prefix and quoting style, decoded on the fly
//! - `#` comments (stripped)
//! - logical lines: newlines inside brackets and after a backslash join
//!   physical lines
//!
//! A bad literal is recorded as a [`LexError`] and the scanner resumes at
//! the next physical line.

use thiserror::Error;

use crate::literal::{decode_string_literal, is_string_prefix, LiteralError};
use crate::token::{Token, TokenKind};

/// Multi-character operators, longest first.
const MULTI_OPS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "...", "==", "!=", "<=", ">=", "->", "**", "//", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", ":=", ">>", "<<",
];

/// A literal that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {col}: {error}")]
pub struct LexError {
    pub line: u32,
    pub col: u32,
    pub error: LiteralError,
}

/// Result of scanning: tokens plus any literal errors.
#[derive(Debug, Clone)]
pub struct LexResult {
    /// Always ends with [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    col: u32,
    /// Open bracket depth; newlines inside brackets are not logical.
    depth: u32,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
            depth: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn lex(mut self) -> LexResult {
        while let Some(ch) = self.peek() {
            match ch {
                b' ' | b'\t' | b'\x0c' => {
                    self.advance();
                }
                b'#' => self.skip_to_line_end(),
                b'\\' if matches!(self.peek_at(1), Some(b'\n' | b'\r')) => {
                    self.advance();
                    self.consume_line_break();
                }
                b'\n' | b'\r' => {
                    self.end_logical_line();
                    self.consume_line_break();
                }
                b'"' | b'\'' => self.scan_string(),
                c if c.is_ascii_alphabetic() || c == b'_' || self.at_unicode_letter() => {
                    self.scan_name()
                }
                c if c.is_ascii_digit() => self.scan_number(),
                _ => self.scan_op(),
            }
        }

        self.end_logical_line();
        self.push(TokenKind::Eof, self.line, self.col);
        LexResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn at_unicode_letter(&self) -> bool {
        self.source[self.pos..]
            .chars()
            .next()
            .is_some_and(|ch| !ch.is_ascii() && ch.is_alphabetic())
    }

    /// Consume `\n`, `\r\n` or a lone `\r` as one line break.
    fn consume_line_break(&mut self) {
        if self.peek() == Some(b'\r') {
            self.pos += 1;
            if self.peek() == Some(b'\n') {
                self.pos += 1;
            }
            self.line += 1;
            self.col = 1;
        } else {
            self.advance();
        }
    }

    fn skip_to_line_end(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == b'\n' || ch == b'\r' {
                break;
            }
            self.advance();
        }
    }

    fn push(&mut self, kind: TokenKind, line: u32, col: u32) {
        self.tokens.push(Token::new(kind, line, col));
    }

    fn end_logical_line(&mut self) {
        if self.depth > 0 {
            return;
        }
        let open_line = self
            .tokens
            .last()
            .is_some_and(|t| t.kind != TokenKind::Newline);
        if open_line {
            self.push(TokenKind::Newline, self.line, self.col);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanners
    // ─────────────────────────────────────────────────────────────

    fn scan_name(&mut self) {
        let (line, col, start) = (self.line, self.col, self.pos);
        while let Some(ch) = self.source[self.pos..].chars().next() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        let word = &self.source[start..self.pos];
        if matches!(self.peek(), Some(b'"' | b'\'')) && is_string_prefix(word.as_bytes()) {
            self.pos = start;
            self.line = line;
            self.col = col;
            self.scan_string();
            return;
        }
        self.push(TokenKind::Name(word.to_string()), line, col);
    }

    fn scan_number(&mut self) {
        let (line, col, start) = (self.line, self.col, self.pos);
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'.' || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        let text = self.source[start..self.pos].to_string();
        self.push(TokenKind::Number(text), line, col);
    }

    fn scan_string(&mut self) {
        let (line, col) = (self.line, self.col);
        match decode_string_literal(&self.source[self.pos..]) {
            Ok((text, used)) => {
                let end = self.pos + used;
                while self.pos < end {
                    self.advance();
                }
                self.push(TokenKind::Str(text), line, col);
            }
            Err(error) => {
                self.errors.push(LexError { line, col, error });
                self.skip_to_line_end();
            }
        }
    }

    fn scan_op(&mut self) {
        let (line, col) = (self.line, self.col);
        let rest = &self.source[self.pos..];
        let op = MULTI_OPS
            .iter()
            .find(|op| rest.starts_with(**op))
            .map(|op| op.to_string());
        let op = match op {
            Some(op) => op,
            None => match rest.chars().next() {
                Some(ch) => ch.to_string(),
                None => return,
            },
        };
        for _ in 0..op.chars().count() {
            self.advance();
        }
        match op.as_str() {
            "(" | "[" | "{" => self.depth += 1,
            ")" | "]" | "}" => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        self.push(TokenKind::Op(op), line, col);
    }
}

/// Scan `source` into tokens.
pub fn tokenize(source: &str) -> LexResult {
    Lexer::new(source).lex()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    fn name(n: &str) -> TokenKind {
        TokenKind::Name(n.into())
    }

    fn op(o: &str) -> TokenKind {
        TokenKind::Op(o.into())
    }

    #[test]
    fn assignment_line() {
        assert_eq!(
            kinds("BOT_NAME = \"Shop\"\n"),
            vec![
                name("BOT_NAME"),
                op("="),
                TokenKind::Str("Shop".into()),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(
            kinds("# header\nx = 1  # trailing\n"),
            vec![
                name("x"),
                op("="),
                TokenKind::Number("1".into()),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn brackets_join_lines() {
        let toks = kinds("f(\n    a,\n    b,\n)\n");
        let newlines = toks.iter().filter(|k| **k == TokenKind::Newline).count();
        assert_eq!(newlines, 1);
    }

    #[test]
    fn backslash_joins_lines() {
        let toks = kinds("x = 1 + \\\n    2\n");
        let newlines = toks.iter().filter(|k| **k == TokenKind::Newline).count();
        assert_eq!(newlines, 1);
    }

    #[test]
    fn prefixed_strings_are_one_token() {
        assert_eq!(
            kinds("print(f\"Starting {BOT_NAME}...\")"),
            vec![
                name("print"),
                op("("),
                TokenKind::Str("Starting {BOT_NAME}...".into()),
                op(")"),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn names_that_look_like_prefixes() {
        assert_eq!(kinds("f = b")[..3], [name("f"), op("="), name("b")]);
    }

    #[test]
    fn multi_char_operators() {
        assert_eq!(kinds("a == b")[..3], [name("a"), op("=="), name("b")]);
    }

    #[test]
    fn positions_are_one_based() {
        let result = tokenize("x = 1\n  y\n");
        let y = result.tokens.iter().find(|t| t.is_name("y")).unwrap();
        assert_eq!((y.line, y.col), (2, 3));
    }

    #[test]
    fn triple_quoted_literal_advances_lines() {
        let result = tokenize("x = \"\"\"a\nb\"\"\"\ny = 2\n");
        let y = result.tokens.iter().find(|t| t.is_name("y")).unwrap();
        assert_eq!(y.line, 3);
    }

    #[test]
    fn unterminated_literal_is_reported_and_scanning_resumes() {
        let result = tokenize("x = \"oops\ny = 2\n");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 1);
        assert_eq!(result.errors[0].col, 5);
        assert_eq!(result.errors[0].error, LiteralError::Unterminated);
        assert!(result.tokens.iter().any(|t| t.is_name("y")));
    }

    #[test]
    fn always_ends_with_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("x"), vec![name("x"), TokenKind::Newline, TokenKind::Eof]);
    }
}
