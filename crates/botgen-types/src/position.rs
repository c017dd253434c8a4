use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a block in the caller's input list.
///
/// `block_type` is the raw tag as written by the caller (it may be unknown
/// or empty), so diagnostics can point at blocks the generator rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    /// 0-based position in the input list.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
}

impl BlockPos {
    pub fn new(index: usize, block_type: impl Into<String>) -> Self {
        let block_type = block_type.into();
        Self {
            index,
            block_type: if block_type.is_empty() {
                None
            } else {
                Some(block_type)
            },
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.block_type {
            Some(ty) => write!(f, "block {} ({})", self.index, ty),
            None => write!(f, "block {}", self.index),
        }
    }
}
