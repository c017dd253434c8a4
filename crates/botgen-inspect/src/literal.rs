//! Python string-literal decoding.
//!
//! Supports `'`/`"` and triple-quoted literals, the `r`/`b`/`u`/`f` prefixes
//! (any case, any valid combination), and the standard escape set:
//! `\\ \' \" \a \b \f \n \r \t \v`, octal `\ooo`, `\xNN`, `\uNNNN`,
//! `\UNNNNNNNN` and backslash-newline continuation. Unknown escapes keep
//! their backslash, as Python does. Named escapes (`\N{...}`) are not
//! supported.
//!
//! f-strings are decoded as plain text: replacement fields stay in the
//! output verbatim.

use thiserror::Error;

/// Why a literal could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("expected a string literal")]
    NotALiteral,

    #[error("unterminated string literal")]
    Unterminated,

    #[error("invalid escape sequence at byte {offset}: {reason}")]
    InvalidEscape { offset: usize, reason: &'static str },
}

/// Decode the string literal at the start of `src`.
///
/// Returns the decoded text and the number of bytes the literal occupies,
/// prefix and quotes included.
pub fn decode_string_literal(src: &str) -> Result<(String, usize), LiteralError> {
    let bytes = src.as_bytes();
    let prefix_len = prefix_len(bytes).ok_or(LiteralError::NotALiteral)?;
    let prefix = &src[..prefix_len];
    let raw = prefix.contains(['r', 'R']);
    let is_bytes = prefix.contains(['b', 'B']);

    let quote = bytes[prefix_len];
    let triple =
        bytes.get(prefix_len + 1) == Some(&quote) && bytes.get(prefix_len + 2) == Some(&quote);
    let delim_len = if triple { 3 } else { 1 };

    let body_start = prefix_len + delim_len;
    let mut out = String::new();
    let mut chars = src[body_start..].char_indices().peekable();

    while let Some((rel, ch)) = chars.next() {
        let at = body_start + rel;
        if ch as u32 == quote as u32 {
            if !triple {
                return Ok((out, at + 1));
            }
            if bytes.get(at + 1) == Some(&quote) && bytes.get(at + 2) == Some(&quote) {
                return Ok((out, at + 3));
            }
            out.push(ch);
            continue;
        }
        match ch {
            '\n' | '\r' if !triple => return Err(LiteralError::Unterminated),
            '\\' => {
                let (_, next) = chars.next().ok_or(LiteralError::Unterminated)?;
                if raw {
                    out.push('\\');
                    out.push(next);
                    continue;
                }
                match next {
                    '\n' => {}
                    '\r' => {
                        if let Some(&(_, '\n')) = chars.peek() {
                            chars.next();
                        }
                    }
                    '\\' | '\'' | '"' => out.push(next),
                    'a' => out.push('\u{07}'),
                    'b' => out.push('\u{08}'),
                    'f' => out.push('\u{0c}'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'v' => out.push('\u{0b}'),
                    '0'..='7' => {
                        let mut value = next.to_digit(8).unwrap_or(0);
                        for _ in 0..2 {
                            match chars.peek().and_then(|&(_, c)| c.to_digit(8)) {
                                Some(d) => {
                                    value = value * 8 + d;
                                    chars.next();
                                }
                                None => break,
                            }
                        }
                        out.push(scalar(value, at)?);
                    }
                    'x' => out.push(scalar(hex_digits(&mut chars, 2, at)?, at)?),
                    'u' if !is_bytes => out.push(scalar(hex_digits(&mut chars, 4, at)?, at)?),
                    'U' if !is_bytes => out.push(scalar(hex_digits(&mut chars, 8, at)?, at)?),
                    'N' if !is_bytes => {
                        return Err(LiteralError::InvalidEscape {
                            offset: at,
                            reason: "named escapes are not supported",
                        })
                    }
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    Err(LiteralError::Unterminated)
}

/// Length of the prefix before the opening quote, or `None` if `bytes` does
/// not start a string literal.
fn prefix_len(bytes: &[u8]) -> Option<usize> {
    let len = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if !matches!(bytes.get(len), Some(b'"' | b'\'')) {
        return None;
    }
    is_string_prefix(&bytes[..len]).then_some(len)
}

/// Whether `prefix` is a legal Python string prefix (possibly empty).
pub fn is_string_prefix(prefix: &[u8]) -> bool {
    let lower: Vec<u8> = prefix.iter().map(u8::to_ascii_lowercase).collect();
    matches!(
        lower.as_slice(),
        b"" | b"r" | b"u" | b"b" | b"f" | b"br" | b"rb" | b"fr" | b"rf"
    )
}

fn hex_digits(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    count: usize,
    offset: usize,
) -> Result<u32, LiteralError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .peek()
            .and_then(|&(_, c)| c.to_digit(16))
            .ok_or(LiteralError::InvalidEscape {
                offset,
                reason: "truncated hex escape",
            })?;
        chars.next();
        value = value * 16 + digit;
    }
    Ok(value)
}

fn scalar(value: u32, offset: usize) -> Result<char, LiteralError> {
    char::from_u32(value).ok_or(LiteralError::InvalidEscape {
        offset,
        reason: "not a Unicode scalar value",
    })
}
