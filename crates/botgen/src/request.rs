//! Parsing of the JSON request envelope:
//!
//! ```json
//! { "metadata": { "name": "Shop", "description": "..." },
//!   "blocks": [ { "type": "welcome", "config": { "message": "Hi" } } ] }
//! ```
//!
//! Only the envelope is checked here. Individual blocks are validated by
//! the normalizer, which downgrades problems to warnings.

use botgen_types::{GenerateError, RawBlock, RawMetadata};
use serde_json::{Map, Value};

/// A structurally valid generation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRequest {
    pub metadata: RawMetadata,
    pub blocks: Vec<RawBlock>,
}

impl GenerateRequest {
    pub fn from_json(input: &str) -> Result<Self, GenerateError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, GenerateError> {
        let Value::Object(root) = value else {
            return Err(GenerateError::NotAnObject {
                found: GenerateError::json_kind(value),
            });
        };

        let blocks = match root.get("blocks") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(record) => Ok(RawBlock::from_record(record)),
                    other => Err(GenerateError::BlockNotARecord {
                        index,
                        found: GenerateError::json_kind(other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(GenerateError::BlocksNotAList {
                    found: GenerateError::json_kind(other),
                })
            }
            None => return Err(GenerateError::BlocksNotAList { found: "nothing" }),
        };

        let metadata = match root.get("metadata") {
            None | Some(Value::Null) => RawMetadata::default(),
            Some(Value::Object(meta)) => RawMetadata {
                name: metadata_field(meta, "name")?,
                description: metadata_field(meta, "description")?,
            },
            Some(other) => {
                return Err(GenerateError::InvalidMetadata(format!(
                    "expected an object, found {}",
                    GenerateError::json_kind(other)
                )))
            }
        };

        Ok(Self { metadata, blocks })
    }
}

fn metadata_field(meta: &Map<String, Value>, key: &str) -> Result<Option<String>, GenerateError> {
    match meta.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(GenerateError::InvalidMetadata(format!(
            "'{key}' must be a string, found {}",
            GenerateError::json_kind(other)
        ))),
    }
}
