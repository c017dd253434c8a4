//! Shared types for the botgen pipeline.
//!
//! This crate defines the raw and normalized block model, bot metadata,
//! the literal policy, diagnostics, and the structural error type used
//! across all pipeline stages.

mod error;
mod policy;
mod position;
pub mod block;

pub use block::{
    Block, BlockBody, BlockKind, BotMetadata, NormalizedConfig, RawBlock, RawMetadata,
    DEFAULT_BOT_DESCRIPTION, DEFAULT_BOT_NAME,
};
pub use error::{Diagnostic, DiagnosticCategory, DiagnosticCode, Diagnostics, GenerateError};
pub use policy::LiteralPolicy;
pub use position::BlockPos;

/// Result type used for structural failures throughout botgen.
pub type Result<T> = std::result::Result<T, GenerateError>;
