//! Determinism and ordering properties of generated programs.
//!
//! - identical input → byte-identical program and hash, 100 iterations
//! - handler order tracks block order
//! - colliding triggers never share a handler name
//! - results do not depend on unrelated blocks elsewhere in the input

use botgen::{generate, RawBlock, RawMetadata};
use botgen_inspect::inspect_program;
use serde_json::{json, Value};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn raw(kind: &str, config: Value) -> RawBlock {
    RawBlock {
        id: None,
        kind: kind.to_string(),
        config,
    }
}

fn custom(trigger: &str, reply: &str) -> RawBlock {
    raw(
        "custom_response",
        json!({ "trigger": trigger, "reply": reply }),
    )
}

fn meta() -> RawMetadata {
    RawMetadata::new("Shop", "Sells things")
}

fn mixed_blocks() -> Vec<RawBlock> {
    vec![
        raw("welcome", json!({ "message": "Hi \"there\"" })),
        raw("help", json!({})),
        custom("price", "It costs $5"),
        custom("Price", "Still $5"),
        raw("about", json!({ "description": "We sell\nthings" })),
        raw("echo", json!({})),
        raw("echo", json!({})),
        raw("unknown", json!({})),
    ]
}

fn handler_names(blocks: &[RawBlock]) -> Vec<String> {
    let result = generate(&meta(), blocks);
    inspect_program(&result.program_text)
        .handlers
        .into_iter()
        .map(|h| h.name)
        .collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn determinism_100_iterations() {
    let blocks = mixed_blocks();
    let reference = generate(&meta(), &blocks);
    for i in 0..100 {
        let again = generate(&meta(), &blocks);
        assert_eq!(
            again.program_text, reference.program_text,
            "program differs at iteration {i}"
        );
        assert_eq!(again.program_hash, reference.program_hash);
        assert_eq!(again.warnings, reference.warnings);
    }
}

#[test]
fn hash_changes_with_content() {
    let a = generate(&meta(), &[custom("price", "5")]);
    let b = generate(&meta(), &[custom("price", "6")]);
    assert_ne!(a.program_hash, b.program_hash);
}

// ══════════════════════════════════════════════════════════════════════════════
// Ordering
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn reordering_blocks_reorders_handlers_only() {
    let forward = vec![
        raw("welcome", json!({ "message": "Hi" })),
        raw("help", json!({})),
        raw("echo", json!({})),
    ];
    let backward: Vec<_> = forward.iter().rev().cloned().collect();

    let mut a = handler_names(&forward);
    let b = handler_names(&backward);
    assert_eq!(a, ["send_welcome", "send_help", "echo_all"]);
    assert_eq!(b, ["echo_all", "send_help", "send_welcome"]);
    a.reverse();
    assert_eq!(a, b);
}

#[test]
fn fragments_follow_input_positions() {
    let result = generate(&meta(), &mixed_blocks());
    let positions: Vec<_> = result.fragments.iter().map(|f| f.index).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert_eq!(positions, [0, 1, 2, 3, 4, 5]);
}

// ══════════════════════════════════════════════════════════════════════════════
// Uniqueness
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn identical_triggers_get_distinct_handlers() {
    let blocks: Vec<_> = (0..20).map(|i| custom("Same Trigger", &i.to_string())).collect();
    let names = handler_names(&blocks);
    assert_eq!(names.len(), 20);
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 20);
}

#[test]
fn triggers_that_slug_to_skeleton_names_stay_unique() {
    let blocks = [
        custom("bot", "1"),
        custom("echo all", "2"),
        custom("send welcome", "3"),
        raw("echo", json!({})),
        raw("welcome", json!({ "message": "Hi" })),
    ];
    let result = generate(&meta(), &blocks);
    let report = inspect_program(&result.program_text);
    assert!(report.duplicates.is_empty(), "{:?}", report.duplicates);
    assert_eq!(report.handlers.len(), 5);
    assert!(result.warnings.is_empty());
}

#[test]
fn custom_names_do_not_depend_on_other_blocks_content() {
    let a = generate(
        &meta(),
        &[raw("help", json!({})), custom("price", "5")],
    );
    let b = generate(
        &meta(),
        &[raw("about", json!({ "description": "x" })), custom("price", "5")],
    );
    assert_eq!(a.fragments[1].identifier, b.fragments[1].identifier);
}
