//! Whole-program code generation.
//!
//! Runs [`emit`] over every normalized block with one shared
//! [`ReservedIdents`] set, converts recoverable [`CodegenError`]s into
//! warnings, and hands the surviving fragments to [`assemble`].

use botgen_types::{
    BlockKind, BlockPos, Diagnostic, DiagnosticCode, Diagnostics, LiteralPolicy, NormalizedConfig,
};
use tracing::{debug, warn};

use crate::assembler::assemble;
use crate::emitter::{emit, FragmentInfo};
use crate::error::CodegenError;
use crate::ident::ReservedIdents;

/// Result of code generation.
#[derive(Debug, Clone)]
pub struct CodegenOutput {
    pub program: String,
    /// Emitted fragments in output order.
    pub fragments: Vec<FragmentInfo>,
    /// Warnings for blocks dropped during emission.
    pub diagnostics: Diagnostics,
}

/// Generate the program for a normalized configuration.
pub fn compile_program(config: &NormalizedConfig, policy: LiteralPolicy) -> CodegenOutput {
    let mut used = ReservedIdents::with_skeleton();
    let mut diagnostics = Diagnostics::empty();
    let mut fragments = Vec::with_capacity(config.blocks.len());

    for block in &config.blocks {
        match emit(block, &config.metadata, &mut used, policy) {
            Ok(fragment) => {
                debug!(
                    index = block.index,
                    block_type = %block.kind(),
                    identifier = %fragment.identifier,
                    "fragment emitted"
                );
                fragments.push(fragment);
            }
            Err(err) => {
                let warning = emission_warning(block.index, block.kind(), &err);
                warn!(
                    code = %warning.code,
                    index = block.index,
                    block_type = %block.kind(),
                    "{}",
                    warning.message
                );
                diagnostics.push(warning);
            }
        }
    }

    CodegenOutput {
        program: assemble(&config.metadata, &fragments),
        fragments: fragments.iter().map(|f| f.info()).collect(),
        diagnostics,
    }
}

fn emission_warning(index: usize, kind: BlockKind, err: &CodegenError) -> Diagnostic {
    let pos = BlockPos::new(index, kind.as_str());
    match err {
        CodegenError::LineTerminatorInLiteral { .. } => {
            Diagnostic::at(pos, DiagnosticCode::LINE_TERMINATOR_IN_LITERAL, err.to_string())
                .with_suggestion("remove the line break or use the 'escape' literal policy")
        }
        CodegenError::IdentifierTaken { .. } if kind == BlockKind::Echo => Diagnostic::at(
            pos,
            DiagnosticCode::DUPLICATE_ECHO,
            "echo is already enabled by an earlier block",
        ),
        CodegenError::IdentifierTaken { .. } => Diagnostic::at(
            pos,
            DiagnosticCode::DUPLICATE_COMMAND,
            format!("a '{kind}' block was already emitted; only the first one is used"),
        ),
    }
}
