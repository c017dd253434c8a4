//! botgen: turns a bot builder configuration into a runnable Python
//! Telegram bot.
//!
//! ```text
//! JSON request → GenerateRequest → Normalizer → Emitter → Assembler → GenerateResult
//! ```
//!
//! Malformed blocks never fail a call: they are dropped and reported as
//! warnings next to a program that is still valid. Only a malformed request
//! envelope is an error.
//!
//! # Usage
//!
//! ```
//! use botgen::{generate, RawBlock, RawMetadata};
//! use serde_json::json;
//!
//! let blocks = vec![RawBlock::new(
//!     "custom_response",
//!     json!({ "trigger": "price", "reply": "It costs $5" })
//!         .as_object()
//!         .cloned()
//!         .unwrap_or_default(),
//! )];
//! let result = generate(&RawMetadata::new("Shop", "Sells things"), &blocks);
//! assert!(result.warnings.is_empty());
//! assert!(result.program_text.contains("\"price\" in message.text.lower()"));
//! ```

pub mod catalog;
pub mod config;
pub mod request;
pub mod result;

use botgen_codegen::compile_program;
use botgen_normalizer::{from_legacy, normalize};
use serde_json::Value;
use tracing::info;

pub use botgen_types::{
    BlockKind, Diagnostic, DiagnosticCode, Diagnostics, GenerateError, LiteralPolicy, RawBlock,
    RawMetadata,
};
pub use catalog::{block_catalog, block_catalog_json, BlockSpec};
pub use config::{ConfigError, GeneratorConfig};
pub use request::GenerateRequest;
pub use result::{program_hash, GenerateResponse, GenerateResult};

/// Generate a program with the default configuration.
pub fn generate(metadata: &RawMetadata, blocks: &[RawBlock]) -> GenerateResult {
    generate_with_config(metadata, blocks, &GeneratorConfig::default())
}

/// Generate a program.
pub fn generate_with_config(
    metadata: &RawMetadata,
    blocks: &[RawBlock],
    config: &GeneratorConfig,
) -> GenerateResult {
    let normalized = normalize(blocks, metadata);
    let output = compile_program(&normalized.config, config.literal_policy);

    let mut diagnostics = normalized.diagnostics;
    diagnostics.extend(output.diagnostics);
    diagnostics.sort_by_position();

    info!(
        blocks_in = blocks.len(),
        fragments_out = output.fragments.len(),
        warnings = diagnostics.len(),
        literal_policy = config.literal_policy.as_str(),
        "bot program generated"
    );

    GenerateResult::new(output.program, diagnostics, output.fragments)
}

/// Generate from an already-parsed request.
pub fn generate_request(request: &GenerateRequest, config: &GeneratorConfig) -> GenerateResult {
    generate_with_config(&request.metadata, &request.blocks, config)
}

/// Generate from a JSON value holding `{ "metadata": ..., "blocks": [...] }`.
pub fn generate_value(
    value: &Value,
    config: &GeneratorConfig,
) -> Result<GenerateResult, GenerateError> {
    let request = GenerateRequest::from_value(value)?;
    Ok(generate_request(&request, config))
}

/// Generate from request JSON text.
pub fn generate_json(
    input: &str,
    config: &GeneratorConfig,
) -> Result<GenerateResult, GenerateError> {
    let request = GenerateRequest::from_json(input)?;
    Ok(generate_request(&request, config))
}

/// Generate from the legacy flat configuration JSON.
pub fn generate_legacy_json(
    input: &str,
    config: &GeneratorConfig,
) -> Result<GenerateResult, GenerateError> {
    let value: Value = serde_json::from_str(input)?;
    let (metadata, blocks) = from_legacy(&value)?;
    Ok(generate_with_config(&metadata, &blocks, config))
}

/// Generate from request JSON text, folding structural errors into the
/// response envelope.
pub fn generate_to_response(input: &str, config: &GeneratorConfig) -> GenerateResponse {
    match generate_json(input, config) {
        Ok(result) => GenerateResponse::ok(result),
        Err(err) => GenerateResponse::failed(err),
    }
}
