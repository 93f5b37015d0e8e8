//! Detection engine configuration.
//!
//! Keyword model data, labels, and sensitivities are process-wide,
//! init-once state. They are passed to the engine as an explicit,
//! validated configuration struct built at startup rather than as loose
//! mutable globals.

use thiserror::Error;

use crate::constants::DEFAULT_SENSITIVITY;

/// One keyword the engine should listen for.
pub struct KeywordEntry {
    /// Human-readable name, reported alongside detections.
    pub label: &'static str,
    /// Opaque pre-trained model data for this keyword.
    pub model: &'static [u8],
    /// Detection sensitivity in `0.0..=1.0`. Higher values reduce misses
    /// at the cost of more false activations.
    pub sensitivity: f32,
}

impl KeywordEntry {
    /// Entry with the default sensitivity.
    pub const fn new(label: &'static str, model: &'static [u8]) -> Self {
        KeywordEntry {
            label,
            model,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// Configuration rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("no keywords configured")]
    NoKeywords,
    #[error("keyword {index}: sensitivity {value} outside 0.0..=1.0")]
    SensitivityOutOfRange { index: usize, value: f32 },
    #[error("keyword {index}: model data is empty")]
    EmptyModel { index: usize },
}

/// Validated set of keywords handed to the engine at init.
pub struct EngineConfig {
    keywords: &'static [KeywordEntry],
}

impl EngineConfig {
    /// Validate and wrap a keyword table.
    ///
    /// Requires at least one keyword, non-empty model data, and every
    /// sensitivity within `0.0..=1.0`.
    pub fn new(keywords: &'static [KeywordEntry]) -> Result<Self, ConfigError> {
        if keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }
        for (index, entry) in keywords.iter().enumerate() {
            if entry.model.is_empty() {
                return Err(ConfigError::EmptyModel { index });
            }
            if !(0.0..=1.0).contains(&entry.sensitivity) {
                return Err(ConfigError::SensitivityOutOfRange {
                    index,
                    value: entry.sensitivity,
                });
            }
        }
        Ok(EngineConfig { keywords })
    }

    /// All configured keywords, in detection-index order.
    pub fn keywords(&self) -> &'static [KeywordEntry] {
        self.keywords
    }

    /// Number of configured keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Label for a detection index reported by the engine.
    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.keywords.get(index).map(|k| k.label)
    }
}
