//! Codegen error types.

use thiserror::Error;

/// Reasons a single block cannot be emitted.
///
/// None of these are fatal to a generation call; [`crate::program`] turns
/// them into warnings and drops the block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A text field contains a line terminator and the literal policy is
    /// `reject`.
    #[error("field '{field}' contains a line break, which is not allowed in a single-line string")]
    LineTerminatorInLiteral { field: &'static str },

    /// The handler identifier this block needs is already taken.
    #[error("identifier '{identifier}' is already defined")]
    IdentifierTaken { identifier: String },
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
