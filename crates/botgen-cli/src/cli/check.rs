//! `botgen check`: inspect a generated program.

use std::path::Path;

use anyhow::{bail, Result};
use botgen_inspect::{inspect_program, ProgramReport, Reply, Trigger};

use super::read_input;

pub fn check(path: &Path, json: bool) -> Result<()> {
    let source = read_input(path)?;
    let report = inspect_program(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        print!("{}", render_report(&report));
    }

    if !report.is_clean() {
        bail!(
            "{}: {} duplicate definition(s), {} bad literal(s)",
            path.display(),
            report.duplicates.len(),
            report.errors.len()
        );
    }
    Ok(())
}

fn trigger_label(trigger: &Trigger) -> String {
    match trigger {
        Trigger::Commands(commands) => commands
            .iter()
            .map(|c| format!("/{c}"))
            .collect::<Vec<_>>()
            .join(" "),
        Trigger::Contains(needle) => format!("contains {needle:?}"),
        Trigger::CatchAll => "any message".to_string(),
        Trigger::Other => "custom filter".to_string(),
    }
}

fn reply_label(reply: &Reply) -> String {
    match reply {
        Reply::Literal(text) => format!("{text:?}"),
        Reply::MessageText => "<echo>".to_string(),
        Reply::Unresolved(expr) => format!("<{expr}>"),
    }
}

pub fn render_report(report: &ProgramReport) -> String {
    let mut out = String::new();
    for handler in &report.handlers {
        out.push_str(&format!(
            "{:>4}  {}  [{}]\n",
            handler.line,
            handler.name,
            trigger_label(&handler.trigger)
        ));
        for reply in &handler.replies {
            out.push_str(&format!("        -> {}\n", reply_label(reply)));
        }
    }
    for name in &report.duplicates {
        out.push_str(&format!("error: '{name}' is defined more than once\n"));
    }
    for err in &report.errors {
        out.push_str(&format!("error: {err}\n"));
    }
    if !report.has_entry_point {
        out.push_str("note: no __main__ entry point\n");
    }
    out.push_str(&format!("{} handler(s)\n", report.handlers.len()));
    out
}

pub fn report_json(report: &ProgramReport) -> serde_json::Value {
    let handlers: Vec<_> = report
        .handlers
        .iter()
        .map(|h| {
            serde_json::json!({
                "name": h.name,
                "line": h.line,
                "trigger": trigger_label(&h.trigger),
                "docstring": h.docstring,
                "replies": h.replies.iter().map(reply_label).collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::json!({
        "handlers": handlers,
        "constants": report.constants,
        "duplicates": report.duplicates,
        "errors": report.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "has_entry_point": report.has_entry_point,
        "clean": report.is_clean(),
    })
}
