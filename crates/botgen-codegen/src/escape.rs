//! Python string-literal escaping.
//!
//! Every piece of caller-supplied text that lands inside a generated string
//! literal goes through [`quote`]. The output is a double-quoted, non-raw
//! Python literal that evaluates back to exactly the input text and never
//! spans more than one source line.

use botgen_types::LiteralPolicy;

use crate::error::{CodegenError, CodegenResult};

/// Whether `c` ends a line according to Python's `str.splitlines`.
pub fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Escape `text` for the body of a double-quoted Python literal.
///
/// - `\` and `"` are backslash-escaped.
/// - `\n`, `\r`, `\t` use their short escapes.
/// - Remaining C0/C1 control characters and DEL become `\xNN`.
/// - U+2028 and U+2029 become `\uNNNN`.
///
/// Everything else (including non-ASCII text) is copied as is.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Escape and wrap `text` in double quotes.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Enforce `policy` on a user text field destined for a single-line literal.
pub fn check_single_line(
    field: &'static str,
    text: &str,
    policy: LiteralPolicy,
) -> CodegenResult<()> {
    match policy {
        LiteralPolicy::Escape => Ok(()),
        LiteralPolicy::Reject if text.chars().any(is_line_terminator) => {
            Err(CodegenError::LineTerminatorInLiteral { field })
        }
        LiteralPolicy::Reject => Ok(()),
    }
}

/// Check `text` against `policy`, then quote it.
pub fn literal(field: &'static str, text: &str, policy: LiteralPolicy) -> CodegenResult<String> {
    check_single_line(field, text, policy)?;
    Ok(quote(text))
}
