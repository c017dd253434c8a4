//! Browser-side tests for the object API. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn generate_object_round_trips_through_js() {
    let request = echo_request();
    let response = botgen_wasm::generate_object(request).unwrap();
    let response: serde_json::Value = serde_wasm_bindgen::from_value(response).unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["result"]["fragments"][0]["identifier"], "echo_all");
}

#[wasm_bindgen_test]
fn generate_object_rejects_non_objects() {
    let response = botgen_wasm::generate_object(JsValue::from_str("blocks")).unwrap();
    let response: serde_json::Value = serde_wasm_bindgen::from_value(response).unwrap();
    assert_eq!(response["success"], false);
}

fn echo_request() -> JsValue {
    let request = serde_json::json!({ "blocks": [{ "type": "echo" }] });
    serde_wasm_bindgen::to_value(&request).unwrap()
}
