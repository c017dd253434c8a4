//! Configuration normalizer: raw blocks → validated [`NormalizedConfig`].
//!
//! Every failure is local to one block. The block is dropped, a warning is
//! recorded, and the remaining blocks are processed in input order.

use botgen_types::{
    Block, BlockBody, BlockKind, BlockPos, BotMetadata, Diagnostic, DiagnosticCode, Diagnostics,
    GenerateError, NormalizedConfig, RawBlock, RawMetadata, DEFAULT_BOT_DESCRIPTION,
    DEFAULT_BOT_NAME,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::fields::{self, FieldError};

/// Keys accepted for the welcome message, in priority order.
const WELCOME_KEYS: &[&str] = &["message", "description", "welcome_message"];

/// Normalize `blocks` and `metadata` in one call.
pub fn normalize(blocks: &[RawBlock], metadata: &RawMetadata) -> NormalizeResult {
    Normalizer::new(metadata).normalize(blocks)
}

/// Result of normalization: the surviving configuration plus warnings for
/// everything that was dropped.
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    pub config: NormalizedConfig,
    pub diagnostics: Diagnostics,
}

/// Validates raw blocks one at a time, collecting warnings.
pub struct Normalizer<'a> {
    metadata: &'a RawMetadata,
    diagnostics: Diagnostics,
}

impl<'a> Normalizer<'a> {
    pub fn new(metadata: &'a RawMetadata) -> Self {
        Self {
            metadata,
            diagnostics: Diagnostics::empty(),
        }
    }

    /// Run normalization over the whole block list.
    pub fn normalize(mut self, raw_blocks: &[RawBlock]) -> NormalizeResult {
        let metadata = self.normalize_metadata();
        let mut blocks = Vec::with_capacity(raw_blocks.len());

        for (index, raw) in raw_blocks.iter().enumerate() {
            if let Some(block) = self.normalize_block(index, raw) {
                debug!(index, block_type = %block.kind(), "block accepted");
                blocks.push(block);
            }
        }

        NormalizeResult {
            config: NormalizedConfig { metadata, blocks },
            diagnostics: self.diagnostics,
        }
    }

    // ── Metadata ──────────────────────────────────────────────────────────────

    fn normalize_metadata(&self) -> BotMetadata {
        BotMetadata {
            name: text_or_default(self.metadata.name.as_deref(), DEFAULT_BOT_NAME),
            description: text_or_default(
                self.metadata.description.as_deref(),
                DEFAULT_BOT_DESCRIPTION,
            ),
        }
    }

    // ── Blocks ────────────────────────────────────────────────────────────────

    fn normalize_block(&mut self, index: usize, raw: &RawBlock) -> Option<Block> {
        let tag = raw.kind.trim();
        let pos = BlockPos::new(index, tag);

        if tag.is_empty() {
            self.drop_block(
                Diagnostic::at(
                    pos,
                    DiagnosticCode::MISSING_BLOCK_TYPE,
                    "block type is missing or not a string",
                )
                .with_suggestion(known_types_hint()),
            );
            return None;
        }

        let Some(kind) = BlockKind::from_tag(tag) else {
            self.drop_block(
                Diagnostic::at(
                    pos,
                    DiagnosticCode::UNKNOWN_BLOCK_TYPE,
                    format!("unknown block type '{tag}'"),
                )
                .with_suggestion(known_types_hint()),
            );
            return None;
        };

        let empty = Map::new();
        let config = match &raw.config {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => {
                self.drop_block(Diagnostic::at(
                    pos,
                    DiagnosticCode::INVALID_FIELD_TYPE,
                    format!(
                        "block config must be an object, found {}",
                        GenerateError::json_kind(other)
                    ),
                ));
                return None;
            }
        };

        let body = match kind {
            BlockKind::Welcome => fields::required_text(config, WELCOME_KEYS)
                .map(|message| Some(BlockBody::Welcome { message })),
            BlockKind::Help => Ok(Some(BlockBody::Help)),
            BlockKind::About => fields::required_text(config, &["description"])
                .map(|description| Some(BlockBody::About { description })),
            BlockKind::CustomResponse => fields::required_text(config, &["trigger"])
                .and_then(|trigger| {
                    let reply = fields::required_text(config, &["reply"])?;
                    Ok(Some(BlockBody::CustomResponse { trigger, reply }))
                }),
            BlockKind::Echo => fields::optional_flag(config, "enabled", true)
                .map(|enabled| enabled.then_some(BlockBody::Echo)),
        };

        match body {
            Ok(Some(body)) => Some(Block {
                index,
                id: raw.id,
                body,
            }),
            Ok(None) => {
                debug!(index, "echo block disabled, skipping");
                None
            }
            Err(err) => {
                self.drop_field_error(pos, &err);
                None
            }
        }
    }

    fn drop_field_error(&mut self, pos: BlockPos, err: &FieldError) {
        self.drop_block(Diagnostic::at(pos, err.code(), err.message()));
    }

    fn drop_block(&mut self, warning: Diagnostic) {
        let position = warning.position.as_ref();
        warn!(
            code = %warning.code,
            index = position.map(|p| p.index),
            block_type = position.and_then(|p| p.block_type.as_deref()),
            "{}",
            warning.message
        );
        self.diagnostics.push(warning);
    }
}

fn text_or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}

fn known_types_hint() -> String {
    let tags: Vec<&str> = BlockKind::ALL.iter().map(|k| k.as_str()).collect();
    format!("use one of: {}", tags.join(", "))
}
