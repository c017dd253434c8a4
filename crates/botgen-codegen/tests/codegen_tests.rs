//! Integration tests for the Python bot code generator.
//!
//! Tests validate:
//! - Skeleton-only output for an empty configuration
//! - Handler order follows block order
//! - Handler names stay unique for colliding triggers
//! - Reply and trigger text round-trips through Python literal decoding
//! - Duplicate echo and command blocks are dropped with a warning
//! - The literal policy only affects block text, never metadata
//! - Deterministic output (same input → same text)

use botgen_codegen::skeleton::TOKEN_PLACEHOLDER;
use botgen_codegen::{compile_program, CodegenOutput};
use botgen_inspect::{inspect_program, ProgramReport, Reply, Trigger};
use botgen_normalizer::normalize;
use botgen_types::{BlockKind, DiagnosticCode, LiteralPolicy, RawBlock, RawMetadata};
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

fn generate_with(
    metadata: &RawMetadata,
    blocks: &[RawBlock],
    policy: LiteralPolicy,
) -> CodegenOutput {
    let normalized = normalize(blocks, metadata);
    assert!(
        normalized.diagnostics.is_empty(),
        "unexpected normalizer warnings: {:?}",
        normalized.diagnostics
    );
    compile_program(&normalized.config, policy)
}

fn generate(blocks: &[RawBlock]) -> CodegenOutput {
    generate_with(
        &RawMetadata::new("Shop", "Sells things"),
        blocks,
        LiteralPolicy::Escape,
    )
}

fn inspect(output: &CodegenOutput) -> ProgramReport {
    let report = inspect_program(&output.program);
    assert!(report.is_clean(), "program not clean: {report:?}");
    report
}

fn custom(trigger: &str, reply: &str) -> RawBlock {
    raw(
        "custom_response",
        json!({ "trigger": trigger, "reply": reply }),
    )
}

// ══════════════════════════════════════════════════════════════════════════════
// Skeleton
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_input_is_skeleton_only() {
    let out = generate(&[]);
    let report = inspect(&out);
    assert!(out.fragments.is_empty());
    assert!(out.diagnostics.is_empty());
    assert!(report.handlers.is_empty());
    assert!(report.has_entry_point);
    assert_eq!(report.constants["TOKEN"], TOKEN_PLACEHOLDER);
}

#[test]
fn token_placeholder_appears_once() {
    let out = generate(&[custom("token", "YOUR_BOT_TOKEN_HERE")]);
    // The reply mentions the placeholder text, but only as an escaped reply.
    let report = inspect(&out);
    assert_eq!(report.constants["TOKEN"], TOKEN_PLACEHOLDER);
    assert_eq!(
        out.program.matches("TOKEN = \"YOUR_BOT_TOKEN_HERE\"").count(),
        1
    );
}

#[test]
fn metadata_constants_round_trip() {
    let meta = RawMetadata::new("Bob \"the\" Bot", "line one\nline two\\");
    let out = generate_with(&meta, &[], LiteralPolicy::Reject);
    let report = inspect(&out);
    assert_eq!(report.constants["BOT_NAME"], "Bob \"the\" Bot");
    assert_eq!(report.constants["BOT_DESCRIPTION"], "line one\nline two\\");
}

// ══════════════════════════════════════════════════════════════════════════════
// Ordering and naming
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn handler_order_follows_block_order() {
    let out = generate(&[
        raw("echo", json!({})),
        custom("b", "2"),
        raw("help", json!({})),
        custom("a", "1"),
        raw("welcome", json!({ "message": "Hi" })),
    ]);
    let report = inspect(&out);
    let names: Vec<_> = report.handlers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "echo_all",
            "custom_response_b_1",
            "send_help",
            "custom_response_a_3",
            "send_welcome",
        ]
    );
    let indexes: Vec<_> = out.fragments.iter().map(|f| f.index).collect();
    assert_eq!(indexes, [0, 1, 2, 3, 4]);
}

#[test]
fn colliding_triggers_get_distinct_names() {
    let out = generate(&[
        custom("Price", "one"),
        custom("price", "two"),
        custom("PRICE!", "three"),
        custom("!!!", "four"),
        custom("???", "five"),
    ]);
    let report = inspect(&out);
    let mut names: Vec<_> = report.handlers.iter().map(|h| h.name.clone()).collect();
    assert_eq!(names.len(), 5);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 5);
}

#[test]
fn trigger_matching_is_case_insensitive() {
    let out = generate(&[custom("Opening Hours", "9-5")]);
    let report = inspect(&out);
    assert_eq!(
        report.handlers[0].trigger,
        Trigger::Contains("opening hours".into())
    );
}

#[test]
fn fragment_info_matches_program() {
    let out = generate(&[raw("welcome", json!({ "message": "Hi" })), custom("x", "y")]);
    let report = inspect(&out);
    for (info, handler) in out.fragments.iter().zip(&report.handlers) {
        assert_eq!(info.identifier, handler.name);
    }
    assert_eq!(out.fragments[0].block_type, BlockKind::Welcome);
    assert_eq!(out.fragments[1].block_type, BlockKind::CustomResponse);
}

// ══════════════════════════════════════════════════════════════════════════════
// Escaping
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn reply_with_quote_round_trips() {
    let out = generate(&[custom("price", "It costs $5\"")]);
    assert!(out.program.contains("\"It costs $5\\\"\""));
    let report = inspect(&out);
    assert_eq!(report.handlers[0].reply_text(), Some("It costs $5\""));
}

#[test]
fn hostile_text_round_trips() {
    let replies = [
        "back\\slash",
        "\"\"\"triple\"\"\"",
        "it's",
        "tab\tand\nnewline\r\nend",
        "nul\0 esc\u{1b} del\u{7f}",
        "sep\u{2028}para\u{2029}end",
        "{not_a_field} %s",
        "emoji 👋 日本語",
        "\\",
        "trailing backslash \\",
    ];
    let blocks: Vec<_> = replies
        .iter()
        .enumerate()
        .map(|(i, reply)| custom(&format!("t{i}"), reply))
        .collect();
    let out = generate(&blocks);
    let report = inspect(&out);
    assert_eq!(report.handlers.len(), replies.len());
    for (handler, expected) in report.handlers.iter().zip(replies) {
        assert_eq!(handler.reply_text(), Some(expected), "{}", handler.name);
    }
}

#[test]
fn injected_code_stays_inside_literal() {
    let out = generate(&[custom(
        "x",
        "\")\nimport os\nos.system(\"rm -rf /\")\n#",
    )]);
    let report = inspect(&out);
    assert_eq!(report.handlers.len(), 1);
    assert!(!out.program.contains("\nimport os"));
}

#[test]
fn welcome_references_description() {
    let out = generate(&[raw("welcome", json!({ "message": "Hi" }))]);
    let report = inspect(&out);
    let text = report.handlers[0].reply_text().unwrap();
    assert!(text.starts_with("Hi\n\n"));
    assert!(text.contains("Sells things"));
    assert!(text.ends_with("Welcome to Shop! I'm here to help you."));
}

#[test]
fn echo_replies_with_message_text() {
    let out = generate(&[raw("echo", json!({ "enabled": true }))]);
    let report = inspect(&out);
    assert_eq!(report.catch_all_handlers().len(), 1);
    assert_eq!(report.handlers[0].replies, vec![Reply::MessageText]);
}

// ══════════════════════════════════════════════════════════════════════════════
// Literal policy
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn reject_policy_drops_multiline_blocks_only() {
    let meta = RawMetadata::new("Shop", "two\nlines");
    let out = generate_with(
        &meta,
        &[
            custom("a", "fine"),
            custom("b", "not\nfine"),
            raw("about", json!({ "description": "x\u{2028}y" })),
            raw("help", json!({})),
        ],
        LiteralPolicy::Reject,
    );
    let report = inspect(&out);
    let names: Vec<_> = report.handlers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["custom_response_a_0", "send_help"]);
    assert_eq!(out.diagnostics.len(), 2);
    assert!(out
        .diagnostics
        .iter()
        .all(|w| w.code == DiagnosticCode::LINE_TERMINATOR_IN_LITERAL));
    let indexes: Vec<_> = out
        .diagnostics
        .iter()
        .map(|w| w.position.as_ref().unwrap().index)
        .collect();
    assert_eq!(indexes, [1, 2]);
    assert_eq!(report.constants["BOT_DESCRIPTION"], "two\nlines");
}

#[test]
fn escape_policy_keeps_multiline_blocks() {
    let out = generate(&[custom("b", "not\nfine")]);
    assert!(out.diagnostics.is_empty());
    assert_eq!(inspect(&out).handlers[0].reply_text(), Some("not\nfine"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Duplicates
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn second_echo_dropped_with_warning() {
    let out = generate(&[
        raw("echo", json!({})),
        custom("a", "1"),
        raw("echo", json!({})),
    ]);
    let report = inspect(&out);
    assert_eq!(report.catch_all_handlers().len(), 1);
    assert_eq!(out.diagnostics.len(), 1);
    let warning = &out.diagnostics.warnings[0];
    assert_eq!(warning.code, DiagnosticCode::DUPLICATE_ECHO);
    assert_eq!(warning.position.as_ref().unwrap().index, 2);
}

#[test]
fn duplicate_commands_keep_first() {
    let out = generate(&[
        raw("about", json!({ "description": "first" })),
        raw("about", json!({ "description": "second" })),
    ]);
    let report = inspect(&out);
    let about = report.command_handlers("about");
    assert_eq!(about.len(), 1);
    assert!(about[0].reply_text().unwrap().starts_with("first"));
    assert!(out.diagnostics.contains(DiagnosticCode::DUPLICATE_COMMAND));
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn repeated_generation_is_identical() {
    let blocks = [
        raw("welcome", json!({ "message": "Hi" })),
        custom("price", "It costs $5\""),
        custom("Price", "again"),
        raw("echo", json!({})),
    ];
    let first = generate(&blocks).program;
    for _ in 0..100 {
        assert_eq!(generate(&blocks).program, first);
    }
}
