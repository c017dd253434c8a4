//! Python identifier generation and reservation.
//!
//! One [`ReservedIdents`] set lives for the duration of a single generation
//! call. The skeleton's own names are reserved up front; each emitted
//! handler reserves its function name before its fragment is accepted.

use std::collections::BTreeSet;

use crate::error::{CodegenError, CodegenResult};
use crate::skeleton::SKELETON_IDENTIFIERS;

/// Prefix of every custom-response handler function.
pub const CUSTOM_HANDLER_PREFIX: &str = "custom_response";

/// Longest trigger slug kept in a handler name. The index suffix is
/// appended after truncation.
const MAX_SLUG_LEN: usize = 40;

/// Identifiers already bound in the generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedIdents {
    names: BTreeSet<String>,
}

impl ReservedIdents {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set pre-loaded with every name the program skeleton binds.
    pub fn with_skeleton() -> Self {
        Self {
            names: SKELETON_IDENTIFIERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reserve exactly `name`, failing if it is already bound.
    pub fn reserve(&mut self, name: &str) -> CodegenResult<()> {
        if self.names.insert(name.to_string()) {
            Ok(())
        } else {
            Err(CodegenError::IdentifierTaken {
                identifier: name.to_string(),
            })
        }
    }

    /// Reserve `base`, or the first free `base_N` (N ≥ 2), and return the
    /// name actually reserved.
    pub fn reserve_unique(&mut self, base: &str) -> String {
        if self.names.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}_{n}");
            if self.names.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Derive an identifier fragment from trigger text.
///
/// Lower-cases the trigger, turns each whitespace character into `_`, and
/// drops anything that is not an ASCII letter, digit or underscore. The
/// result may be empty.
pub fn trigger_slug(trigger: &str) -> String {
    let mut slug = String::with_capacity(trigger.len());
    for c in trigger.chars().flat_map(char::to_lowercase) {
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
        if c.is_whitespace() {
            slug.push('_');
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }
    slug
}

/// Base handler name for a custom response: `custom_response_<slug>_<index>`,
/// or `custom_response_<index>` when the trigger has no usable characters.
///
/// The index is the block's input position, so two triggers with the same
/// slug still produce different names.
pub fn custom_handler_name(trigger: &str, index: usize) -> String {
    let slug = trigger_slug(trigger);
    if slug.is_empty() {
        format!("{CUSTOM_HANDLER_PREFIX}_{index}")
    } else {
        format!("{CUSTOM_HANDLER_PREFIX}_{slug}_{index}")
    }
}
