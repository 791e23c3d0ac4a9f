use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::DEFAULT_SUFFIX;

pub const DEFAULT_EXCERPT_LENGTH: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Excerpt length {excerpt_length} is shorter than suffix {suffix:?}")]
    InvalidExcerptLength {
        excerpt_length: usize,
        suffix: String,
    },
    #[error("Invalid processor config: {0}")]
    Parse(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub excerpt_length: usize,
    pub suffix: String,
}

impl ProcessorConfig {
    pub fn v0() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            suffix: DEFAULT_SUFFIX.into(),
        }
    }

    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Parse a JSON config. Missing keys fall back to [`ProcessorConfig::v0`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ProcessorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs whose suffix cannot fit inside an excerpt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.chars().count() > self.excerpt_length {
            return Err(ConfigError::InvalidExcerptLength {
                excerpt_length: self.excerpt_length,
                suffix: self.suffix.clone(),
            });
        }
        Ok(())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::v0()
    }
}
