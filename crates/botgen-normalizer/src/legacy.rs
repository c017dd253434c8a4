//! Adapter for the flat configuration format used by earlier builder UIs:
//!
//! ```json
//! {
//!   "name": "Shop",
//!   "description": "Sells things",
//!   "welcome_message": "Hi!",
//!   "help_command": true,
//!   "about_command": true,
//!   "custom_responses": [{ "trigger": "price", "reply": "It costs $5" }],
//!   "echo_enabled": false
//! }
//! ```
//!
//! The flat form has a fixed emission order: welcome, help, about, custom
//! responses, echo. Converted blocks go through the normal pipeline, so
//! missing triggers or replies surface as ordinary warnings.

use botgen_types::{GenerateError, RawBlock, RawMetadata, DEFAULT_BOT_DESCRIPTION};
use serde_json::{json, Map, Value};

use crate::fields::truthy;

/// Convert a flat legacy configuration into metadata plus an ordered block
/// list.
pub fn from_legacy(config: &Value) -> Result<(RawMetadata, Vec<RawBlock>), GenerateError> {
    let Value::Object(config) = config else {
        return Err(GenerateError::NotAnObject {
            found: GenerateError::json_kind(config),
        });
    };

    let metadata = RawMetadata {
        name: optional_string(config, "name")?,
        description: optional_string(config, "description")?,
    };

    let mut blocks = Vec::new();

    if truthy(config.get("welcome_message")) {
        blocks.push(block(
            "welcome",
            json!({ "message": config.get("welcome_message").cloned().unwrap_or(Value::Null) }),
        ));
    }

    if truthy(config.get("help_command")) {
        blocks.push(block("help", json!({})));
    }

    if truthy(config.get("about_command")) {
        // The flat form has no separate about text; it reuses the bot
        // description, defaulted the same way metadata is.
        let description = metadata
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_BOT_DESCRIPTION);
        blocks.push(block("about", json!({ "description": description })));
    }

    match config.get("custom_responses") {
        None | Some(Value::Null) => {}
        Some(Value::Array(responses)) => {
            for (index, response) in responses.iter().enumerate() {
                if !response.is_object() {
                    return Err(GenerateError::BlockNotARecord {
                        index,
                        found: GenerateError::json_kind(response),
                    });
                }
                blocks.push(block("custom_response", response.clone()));
            }
        }
        Some(other) => {
            return Err(GenerateError::BlocksNotAList {
                found: GenerateError::json_kind(other),
            })
        }
    }

    if truthy(config.get("echo_enabled")) {
        blocks.push(block("echo", json!({ "enabled": true })));
    }

    Ok((metadata, blocks))
}

fn block(kind: &str, config: Value) -> RawBlock {
    RawBlock {
        id: None,
        kind: kind.to_string(),
        config,
    }
}

fn optional_string(config: &Map<String, Value>, key: &str) -> Result<Option<String>, GenerateError> {
    match config.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(GenerateError::InvalidMetadata(format!(
            "'{key}' must be a string, found {}",
            GenerateError::json_kind(other)
        ))),
    }
}
