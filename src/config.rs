//! Configuration
//!
//! All settings are plain serde structs with defaults, so a JSON file only
//! needs to name the fields it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{EventGraphError, Result};
use crate::types::PosTag;

/// Keyword ranker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Co-occurrence window: words closer than this many positions are linked
    pub window_size: usize,
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Per-node absolute change below which scores are considered stable
    pub convergence_threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-4,
        }
    }
}

impl RankerConfig {
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Check the settings, failing on the first invalid one
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(EventGraphError::invalid(
                "window_size",
                "must be greater than zero",
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(EventGraphError::invalid(
                "damping",
                format!("must lie strictly between 0 and 1, got {}", self.damping),
            ));
        }
        if self.max_iterations == 0 {
            return Err(EventGraphError::invalid(
                "max_iterations",
                "must be greater than zero",
            ));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(EventGraphError::invalid(
                "convergence_threshold",
                format!(
                    "must be a positive finite number, got {}",
                    self.convergence_threshold
                ),
            ));
        }
        Ok(())
    }
}

/// Node colors per event source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPalette {
    pub keyword: String,
    pub frequency: String,
    pub entity: String,
    pub default: String,
}

impl Default for EventPalette {
    fn default() -> Self {
        Self {
            keyword: "red".to_string(),
            frequency: "yellow".to_string(),
            entity: "green".to_string(),
            default: "rgba(51,255,153,0.2)".to_string(),
        }
    }
}

/// Literal category nodes that keyword and frequency events point at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLabels {
    pub keyword: String,
    pub frequent_word: String,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self {
            keyword: "keyword".to_string(),
            frequent_word: "frequent word".to_string(),
        }
    }
}

/// Settings for the whole event aggregation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventGraphConfig {
    pub ranker: RankerConfig,
    /// Number of keywords requested from the ranker
    pub keyword_count: usize,
    /// Number of frequent-word events
    pub frequent_word_count: usize,
    /// Number of entity events (also bounds the co-occurrence entity set)
    pub entity_count: usize,
    /// Fine categories that mark a word as a named entity
    pub entity_categories: Vec<String>,
    /// Parts of speech counted for frequent-word events
    pub event_pos: Vec<PosTag>,
    /// Lowercase words made only of ASCII characters
    pub lowercase_ascii: bool,
    /// Minimum length in characters of a triple's subject and verb
    pub min_triple_term_chars: usize,
    pub palette: EventPalette,
    pub labels: CategoryLabels,
}

impl Default for EventGraphConfig {
    fn default() -> Self {
        Self {
            ranker: RankerConfig::default(),
            keyword_count: 10,
            frequent_word_count: 5,
            entity_count: 5,
            entity_categories: ["PERSON", "ORG", "GPE", "人名", "組織名", "地名"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            event_pos: vec![
                PosTag::Noun,
                PosTag::ProperNoun,
                PosTag::Verb,
                PosTag::Adjective,
            ],
            lowercase_ascii: false,
            min_triple_term_chars: 2,
            palette: EventPalette::default(),
            labels: CategoryLabels::default(),
        }
    }
}

impl EventGraphConfig {
    /// Parse a configuration from JSON text and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_ranker(mut self, ranker: RankerConfig) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_keyword_count(mut self, count: usize) -> Self {
        self.keyword_count = count;
        self
    }

    pub fn with_frequent_word_count(mut self, count: usize) -> Self {
        self.frequent_word_count = count;
        self
    }

    pub fn with_entity_count(mut self, count: usize) -> Self {
        self.entity_count = count;
        self
    }

    pub fn with_entity_categories(mut self, categories: &[&str]) -> Self {
        self.entity_categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_event_pos(mut self, tags: &[PosTag]) -> Self {
        self.event_pos = tags.to_vec();
        self
    }

    pub fn with_lowercase_ascii(mut self, lowercase: bool) -> Self {
        self.lowercase_ascii = lowercase;
        self
    }

    pub fn with_min_triple_term_chars(mut self, chars: usize) -> Self {
        self.min_triple_term_chars = chars;
        self
    }

    /// Whether `category` marks a named entity
    pub fn is_entity_category(&self, category: &str) -> bool {
        self.entity_categories.iter().any(|c| c == category)
    }

    /// Check the settings, failing on the first invalid one
    pub fn validate(&self) -> Result<()> {
        self.ranker.validate()?;

        let counts = [
            ("keyword_count", self.keyword_count),
            ("frequent_word_count", self.frequent_word_count),
            ("entity_count", self.entity_count),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(EventGraphError::invalid(field, "must be greater than zero"));
            }
        }
        Ok(())
    }
}
