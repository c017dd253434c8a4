//! Generator configuration.
//!
//! ```toml
//! # botgen.toml
//! literal_policy = "reject"
//! ```
//!
//! Every field is optional. Unknown keys are rejected so typos surface.

use std::fs;
use std::path::Path;

use botgen_types::LiteralPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid generator config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// How line terminators in block text are handled.
    pub literal_policy: LiteralPolicy,
}

impl GeneratorConfig {
    pub fn with_literal_policy(mut self, policy: LiteralPolicy) -> Self {
        self.literal_policy = policy;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.literal_policy, LiteralPolicy::Escape);
    }

    #[test]
    fn reads_literal_policy() {
        let config = GeneratorConfig::from_toml_str("literal_policy = \"reject\"\n").unwrap();
        assert_eq!(config.literal_policy, LiteralPolicy::Reject);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = GeneratorConfig::from_toml_str("token = \"abc\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(GeneratorConfig::from_toml_str("literal_policy = \"strip\"\n").is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = GeneratorConfig::from_file("/nonexistent/botgen.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/botgen.toml"));
    }
}
