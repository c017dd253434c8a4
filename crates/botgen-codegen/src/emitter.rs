//! Per-block emission.
//!
//! [`emit`] is the single dispatch point over the closed [`BlockBody`] set.
//! Each arm delegates to a fragment builder that:
//! 1. validates and escapes every user text field,
//! 2. reserves its handler identifier,
//! 3. renders the fragment.
//!
//! Steps run in that order, so a failed block leaves the reserved set
//! untouched.

use botgen_types::{Block, BlockBody, BlockKind, BotMetadata, LiteralPolicy};
use serde::{Deserialize, Serialize};

use crate::commands;
use crate::error::CodegenResult;
use crate::ident::ReservedIdents;
use crate::messages;

/// A self-contained unit of generated source for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Input position of the originating block.
    pub index: usize,
    /// Caller-side id of the originating block.
    pub id: Option<u64>,
    pub kind: BlockKind,
    /// Name of the handler function the fragment defines.
    pub identifier: String,
    /// Source text, ending with a single newline.
    pub text: String,
    /// Statement that registers the handler after all decorated ones,
    /// for handlers that must be tried last.
    pub registration: Option<String>,
}

impl Fragment {
    pub fn info(&self) -> FragmentInfo {
        FragmentInfo {
            index: self.index,
            id: self.id,
            block_type: self.kind,
            identifier: self.identifier.clone(),
        }
    }
}

/// Summary of an emitted fragment, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentInfo {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub block_type: BlockKind,
    pub identifier: String,
}

/// Emit the fragment for one block, reserving its identifier in `used`.
pub fn emit(
    block: &Block,
    metadata: &BotMetadata,
    used: &mut ReservedIdents,
    policy: LiteralPolicy,
) -> CodegenResult<Fragment> {
    let (identifier, text) = match &block.body {
        BlockBody::Welcome { message } => commands::welcome(message, metadata, used, policy)?,
        BlockBody::Help => commands::help(used)?,
        BlockBody::About { description } => commands::about(description, used, policy)?,
        BlockBody::CustomResponse { trigger, reply } => {
            messages::custom_response(trigger, reply, block.index, used, policy)?
        }
        BlockBody::Echo => messages::echo(used)?,
    };
    let registration = matches!(block.body, BlockBody::Echo).then(messages::echo_registration);

    Ok(Fragment {
        index: block.index,
        id: block.id,
        kind: block.kind(),
        identifier,
        text,
        registration,
    })
}
