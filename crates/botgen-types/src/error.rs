use crate::BlockPos;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic category, determined by code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Validation,
    Escaping,
    Duplicate,
}

/// Numeric warning code (W100–W399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiagnosticCode(pub u16);

impl DiagnosticCode {
    // ── Validation (W100–W199) ──
    pub const UNKNOWN_BLOCK_TYPE: Self = Self(100);
    pub const MISSING_FIELD: Self = Self(101);
    pub const EMPTY_FIELD: Self = Self(102);
    pub const INVALID_FIELD_TYPE: Self = Self(103);
    pub const MISSING_BLOCK_TYPE: Self = Self(104);

    // ── Escaping (W200–W299) ──
    pub const LINE_TERMINATOR_IN_LITERAL: Self = Self(200);

    // ── Duplicates (W300–W399) ──
    pub const DUPLICATE_ECHO: Self = Self(300);
    pub const DUPLICATE_COMMAND: Self = Self(301);

    /// Get the category for this code.
    pub fn category(self) -> DiagnosticCategory {
        match self.0 {
            200..=299 => DiagnosticCategory::Escaping,
            300..=399 => DiagnosticCategory::Duplicate,
            _ => DiagnosticCategory::Validation,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Escaping => write!(f, "escaping"),
            Self::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// A non-fatal diagnostic describing a dropped or altered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    /// Derived from `code`.
    pub category: DiagnosticCategory,
    /// The block this diagnostic is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<BlockPos>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            category: code.category(),
            position: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a diagnostic attached to a block.
    pub fn at(position: BlockPos, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(code, message).with_position(position)
    }

    pub fn with_position(mut self, position: BlockPos) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pos) = &self.position {
            write!(f, "{pos}: ")?;
        }
        write!(f, "{} [{}] {}", self.code, self.category, self.message)
    }
}

/// Ordered collection of warnings produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub warnings: Vec<Diagnostic>,
    pub total_warnings: usize,
}

impl Diagnostics {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Diagnostic) {
        self.warnings.push(warning);
        self.total_warnings += 1;
    }

    /// Append all warnings from a later pipeline stage.
    pub fn extend(&mut self, other: Diagnostics) {
        for warning in other.warnings {
            self.push(warning);
        }
    }

    /// Stable-sort warnings by block position so that warnings from
    /// different stages read in input order. Unpositioned warnings come first.
    pub fn sort_by_position(&mut self) {
        self.warnings
            .sort_by_key(|w| w.position.as_ref().map(|p| p.index));
    }

    pub fn is_empty(&self) -> bool {
        self.total_warnings == 0
    }

    pub fn len(&self) -> usize {
        self.total_warnings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.warnings.iter()
    }

    /// Whether any warning carries `code`.
    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Render every warning with its `Display` form.
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Structural failures: the request itself is malformed, so no program can
/// be produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level request is not a JSON object.
    #[error("request must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// `blocks` is missing or not an array.
    #[error("'blocks' must be a list, found {found}")]
    BlocksNotAList { found: &'static str },

    /// An element of `blocks` is not a record.
    #[error("block {index} must be an object, found {found}")]
    BlockNotARecord { index: usize, found: &'static str },

    /// `metadata` (or one of its fields) has the wrong shape.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
}

impl GenerateError {
    /// Short JSON type name for error messages.
    pub fn json_kind(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "a list",
            serde_json::Value::Object(_) => "an object",
        }
    }
}
