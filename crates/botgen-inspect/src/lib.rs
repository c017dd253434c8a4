//! botgen inspector: reads a generated Python bot program back.
//!
//! - [`literal`] decodes Python string literals.
//! - [`lexer`] turns source into logical lines of tokens.
//! - [`program`] reports handlers, constants and duplicate definitions.
//!
//! Used to verify generator output and by `botgen check`.

pub mod lexer;
pub mod literal;
pub mod program;
pub mod token;

pub use lexer::{tokenize, LexError, LexResult, Lexer};
pub use literal::{decode_string_literal, LiteralError};
pub use program::{inspect_program, Handler, ProgramReport, Reply, Trigger};
pub use token::{Token, TokenKind};
