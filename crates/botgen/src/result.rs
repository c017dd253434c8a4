//! Output types for a generation call.

use botgen_codegen::FragmentInfo;
use botgen_types::Diagnostics;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A generated program plus everything the caller needs to report on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Python source of the bot.
    pub program_text: String,
    /// One rendered line per warning, in input order.
    pub warnings: Vec<String>,
    pub diagnostics: Diagnostics,
    /// Emitted handlers in output order.
    pub fragments: Vec<FragmentInfo>,
    /// Lowercase hex SHA-256 of `program_text`.
    pub program_hash: String,
}

impl GenerateResult {
    pub fn new(
        program_text: String,
        diagnostics: Diagnostics,
        fragments: Vec<FragmentInfo>,
    ) -> Self {
        Self {
            program_hash: program_hash(&program_text),
            warnings: diagnostics.messages(),
            program_text,
            diagnostics,
            fragments,
        }
    }
}

/// JSON envelope for callers that cannot receive a Rust `Result`
/// (the WASM module, `botgen generate --json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(result: GenerateResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"error":"serialization error: {e}"}}"#)
        })
    }
}

/// Lowercase hex SHA-256 of `text`.
pub fn program_hash(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}
