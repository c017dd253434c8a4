//! botgen as a WASM module for the browser bot builder.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { generate, block_catalog } from 'botgen-wasm';
//!
//! await init();
//!
//! const response = JSON.parse(generate(JSON.stringify({
//!   metadata: { name: "Shop", description: "Sells things" },
//!   blocks: [{ type: "welcome", config: { message: "Hi" } }],
//! })));
//! // { success: true, result: { program_text: "...", warnings: [], ... } }
//! ```

use botgen::{GenerateResponse, GeneratorConfig, LiteralPolicy};
use wasm_bindgen::prelude::*;

/// Generate a bot program from request JSON text.
///
/// Returns a JSON `GenerateResponse`:
/// ```json
/// { "success": true, "result": { "program_text": "...", "warnings": [], ... } }
/// ```
/// A malformed request yields `{ "success": false, "error": "..." }`.
#[wasm_bindgen]
pub fn generate(input: &str) -> String {
    botgen::generate_to_response(input, &GeneratorConfig::default()).to_json()
}

/// Like [`generate`], with an explicit literal policy (`"escape"` or
/// `"reject"`).
#[wasm_bindgen]
pub fn generate_with_policy(input: &str, policy: &str) -> String {
    let config = match parse_policy(policy) {
        Some(policy) => GeneratorConfig::default().with_literal_policy(policy),
        None => {
            return GenerateResponse::failed(format!(
                "unknown literal policy '{policy}', expected 'escape' or 'reject'"
            ))
            .to_json()
        }
    };
    botgen::generate_to_response(input, &config).to_json()
}

/// Generate from a JS object instead of JSON text. Returns the
/// `GenerateResponse` as a JS object.
#[wasm_bindgen]
pub fn generate_object(request: JsValue) -> Result<JsValue, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(request)?;
    let response = match botgen::generate_value(&value, &GeneratorConfig::default()) {
        Ok(result) => GenerateResponse::ok(result),
        Err(err) => GenerateResponse::failed(err),
    };
    Ok(serde_wasm_bindgen::to_value(&response)?)
}

/// The block catalog as JSON, for building the block palette.
#[wasm_bindgen]
pub fn block_catalog() -> String {
    botgen::block_catalog_json()
}

/// Return the generator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_policy(policy: &str) -> Option<LiteralPolicy> {
    match policy {
        "escape" => Some(LiteralPolicy::Escape),
        "reject" => Some(LiteralPolicy::Reject),
        _ => None,
    }
}
