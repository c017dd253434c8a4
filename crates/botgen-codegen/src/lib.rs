//! botgen code generator: turns a [`botgen_types::NormalizedConfig`] into
//! the source of a runnable Python bot built on `pyTelegramBotAPI`.
//!
//! # Architecture
//!
//! ```text
//! NormalizedConfig → emit (per block) → assemble → program text
//! ```
//!
//! - [`emitter`] dispatches each block to its fragment builder
//!   ([`commands`] for `/start`, `/help`, `/about`; [`messages`] for custom
//!   responses and echo).
//! - [`ident`] threads the reserved-identifier set through emission so
//!   handler names never collide.
//! - [`escape`] is the only way user text reaches a string literal.
//! - [`assembler`] wraps fragments in the fixed [`skeleton`].
//! - [`program`] runs the whole thing and turns recoverable emission
//!   failures into warnings.
//!
//! Output is a pure function of the input: no clock, no randomness, no
//! environment.

pub mod assembler;
pub mod commands;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod ident;
pub mod messages;
pub mod program;
pub mod skeleton;

pub use assembler::assemble;
pub use emitter::{emit, Fragment, FragmentInfo};
pub use error::{CodegenError, CodegenResult};
pub use ident::ReservedIdents;
pub use program::{compile_program, CodegenOutput};
