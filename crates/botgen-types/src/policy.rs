use serde::{Deserialize, Serialize};

/// How line terminators in user text are handled when that text lands in a
/// single-line string literal of the generated program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralPolicy {
    /// Line terminators become `\n` / `\r` escape sequences.
    #[default]
    Escape,
    /// A line terminator drops the owning block with a warning.
    Reject,
}

impl LiteralPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::Reject => "reject",
        }
    }
}
