//! Block catalog for builder UIs.
//!
//! Generated from [`BlockKind::ALL`] with an exhaustive match, so adding a
//! block kind without describing it here fails to compile.

use botgen_types::BlockKind;
use serde::Serialize;

/// Description of one block type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSpec {
    #[serde(rename = "type")]
    pub block_type: BlockKind,
    pub label: &'static str,
    pub description: &'static str,
    /// `config` keys that must hold non-empty text.
    pub required_fields: &'static [&'static str],
    /// Accepted `config` keys that may be omitted.
    pub optional_fields: &'static [&'static str],
    /// Whether more than one block of this type produces a handler.
    pub repeatable: bool,
}

impl BlockSpec {
    fn of(kind: BlockKind) -> Self {
        let (label, description, required_fields, optional_fields): (
            _,
            _,
            &'static [&'static str],
            &'static [&'static str],
        ) = match kind {
            BlockKind::Welcome => (
                "Welcome message",
                "Replies to /start with a greeting, the bot description and Help/About buttons",
                &["message"],
                &[],
            ),
            BlockKind::Help => (
                "Help command",
                "Replies to /help with the list of available commands",
                &[],
                &[],
            ),
            BlockKind::About => (
                "About command",
                "Replies to /about with a description of the bot",
                &["description"],
                &[],
            ),
            BlockKind::CustomResponse => (
                "Custom response",
                "Replies with fixed text when a message contains the trigger, ignoring case",
                &["trigger", "reply"],
                &[],
            ),
            BlockKind::Echo => (
                "Echo",
                "Repeats every other text message back to the sender",
                &[],
                &["enabled"],
            ),
        };
        Self {
            block_type: kind,
            label,
            description,
            required_fields,
            optional_fields,
            repeatable: kind.is_repeatable(),
        }
    }
}

/// Every block type, in canonical order.
pub fn block_catalog() -> Vec<BlockSpec> {
    BlockKind::ALL.into_iter().map(BlockSpec::of).collect()
}

/// [`block_catalog`] as pretty-printed JSON.
pub fn block_catalog_json() -> String {
    serde_json::to_string_pretty(&block_catalog()).unwrap_or_else(|_| "[]".to_string())
}
