//! Field extraction from a block's `config` payload.

use botgen_types::{DiagnosticCode, GenerateError};
use serde_json::{Map, Value};

/// Why a required field could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldError {
    Missing { key: &'static str },
    Empty { key: &'static str },
    WrongType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    pub(crate) fn code(&self) -> DiagnosticCode {
        match self {
            Self::Missing { .. } => DiagnosticCode::MISSING_FIELD,
            Self::Empty { .. } => DiagnosticCode::EMPTY_FIELD,
            Self::WrongType { .. } => DiagnosticCode::INVALID_FIELD_TYPE,
        }
    }

    pub(crate) fn message(&self) -> String {
        match self {
            Self::Missing { key } => format!("missing required field '{key}'"),
            Self::Empty { key } => format!("required field '{key}' is empty"),
            Self::WrongType {
                key,
                expected,
                found,
            } => format!("field '{key}' must be {expected}, found {found}"),
        }
    }
}

/// Read a required text field, trying `keys` in order.
///
/// The first key holding non-blank text wins. Strings are trimmed; numbers
/// are accepted and rendered in their JSON form. When no key matches, the
/// most specific failure is reported: a wrongly typed value beats a blank
/// one, which beats absence.
pub(crate) fn required_text(
    config: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<String, FieldError> {
    let mut failure = FieldError::Missing { key: keys[0] };

    for &key in keys {
        let text = match config.get(key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                failure = FieldError::WrongType {
                    key,
                    expected: "text",
                    found: GenerateError::json_kind(other),
                };
                continue;
            }
        };
        if !text.is_empty() {
            return Ok(text);
        }
        if matches!(failure, FieldError::Missing { .. }) {
            failure = FieldError::Empty { key };
        }
    }

    Err(failure)
}

/// Read an optional boolean flag. Absent or null means `default`.
pub(crate) fn optional_flag(
    config: &Map<String, Value>,
    key: &'static str,
    default: bool,
) -> Result<bool, FieldError> {
    match config.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(FieldError::WrongType {
            key,
            expected: "a boolean",
            found: GenerateError::json_kind(other),
        }),
    }
}

/// Loose truthiness used by the legacy flat format.
pub(crate) fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}
