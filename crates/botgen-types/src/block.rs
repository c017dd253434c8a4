//! Block model for bot configurations.
//!
//! Two layers live here:
//! - [`RawBlock`] / [`RawMetadata`]: what the caller hands in, untrusted and
//!   possibly incomplete.
//! - [`Block`] / [`BotMetadata`]: what the normalizer hands to the emitter.
//!   Every text field is trimmed and non-empty.
//!
//! Blocks keep input order. Nothing here is sorted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback bot name when metadata is missing or blank.
pub const DEFAULT_BOT_NAME: &str = "My Bot";
/// Fallback bot description when metadata is missing or blank.
pub const DEFAULT_BOT_DESCRIPTION: &str = "A helpful bot";

// ══════════════════════════════════════════════════════════════════════════════
// Block kinds
// ══════════════════════════════════════════════════════════════════════════════

/// The closed set of block types the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Welcome,
    Help,
    About,
    CustomResponse,
    Echo,
}

impl BlockKind {
    /// All block kinds in canonical order.
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Welcome,
        BlockKind::Help,
        BlockKind::About,
        BlockKind::CustomResponse,
        BlockKind::Echo,
    ];

    /// The wire tag (`type` field) for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Help => "help",
            Self::About => "about",
            Self::CustomResponse => "custom_response",
            Self::Echo => "echo",
        }
    }

    /// Look up a kind by its wire tag. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Whether more than one block of this kind may contribute a fragment.
    pub fn is_repeatable(self) -> bool {
        matches!(self, Self::CustomResponse)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Raw input
// ══════════════════════════════════════════════════════════════════════════════

/// A block as supplied by the caller, before validation.
///
/// `kind` is kept as a string so that unknown types survive deserialization
/// and can be reported as warnings instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub config: Value,
}

impl RawBlock {
    /// Create a raw block with an object payload.
    pub fn new(kind: impl Into<String>, config: Map<String, Value>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            config: Value::Object(config),
        }
    }

    /// Build a raw block from a JSON record.
    ///
    /// A missing or non-string `type` becomes the empty string and a
    /// non-integer `id` is ignored; the normalizer reports both.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            id: record.get("id").and_then(Value::as_u64),
            kind: record
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            config: record.get("config").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Bot identity as supplied by the caller. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Normalized model
// ══════════════════════════════════════════════════════════════════════════════

/// Bot identity after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMetadata {
    pub name: String,
    pub description: String,
}

impl Default for BotMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_BOT_NAME.to_string(),
            description: DEFAULT_BOT_DESCRIPTION.to_string(),
        }
    }
}

/// A validated block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the caller's block list (0-based). Unique within one
    /// generation call.
    pub index: usize,
    /// Caller-side identifier, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub body: BlockBody,
}

impl Block {
    pub fn new(index: usize, body: BlockBody) -> Self {
        Self {
            index,
            id: None,
            body,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }
}

/// Type-specific payload of a validated block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockBody {
    Welcome { message: String },
    Help,
    About { description: String },
    CustomResponse { trigger: String, reply: String },
    Echo,
}

impl BlockBody {
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Welcome { .. } => BlockKind::Welcome,
            Self::Help => BlockKind::Help,
            Self::About { .. } => BlockKind::About,
            Self::CustomResponse { .. } => BlockKind::CustomResponse,
            Self::Echo => BlockKind::Echo,
        }
    }
}

/// Output of the normalizer: metadata with defaults plus surviving blocks
/// in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedConfig {
    pub metadata: BotMetadata,
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(BlockKind::from_tag("Welcome"), None);
        assert_eq!(BlockKind::from_tag("poll"), None);
    }

    #[test]
    fn test_only_custom_response_is_repeatable() {
        let repeatable: Vec<_> = BlockKind::ALL
            .into_iter()
            .filter(|k| k.is_repeatable())
            .collect();
        assert_eq!(repeatable, vec![BlockKind::CustomResponse]);
    }

    #[test]
    fn test_raw_block_deserializes_type_field() {
        let raw: RawBlock = serde_json::from_value(json!({
            "id": 3,
            "type": "custom_response",
            "config": { "trigger": "hi", "reply": "hello" }
        }))
        .unwrap();
        assert_eq!(raw.id, Some(3));
        assert_eq!(raw.kind, "custom_response");
        assert_eq!(raw.config["trigger"], "hi");
    }

    #[test]
    fn test_raw_block_from_record_tolerates_bad_fields() {
        let record = json!({ "type": 42, "id": "x" });
        let raw = RawBlock::from_record(record.as_object().unwrap());
        assert_eq!(raw.kind, "");
        assert_eq!(raw.id, None);
        assert_eq!(raw.config, Value::Null);
    }

    #[test]
    fn test_block_body_serializes_with_type_tag() {
        let body = BlockBody::CustomResponse {
            trigger: "price".into(),
            reply: "5".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "custom_response");
        assert_eq!(json["trigger"], "price");
    }

    #[test]
    fn test_metadata_default() {
        let meta = BotMetadata::default();
        assert_eq!(meta.name, "My Bot");
        assert_eq!(meta.description, "A helpful bot");
    }
}
