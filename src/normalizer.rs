//! Turns raw search provider output into a [`SearchResponse`].
//!
//! Providers reached through a tool adapter hand back a list of content blocks
//! whose `text` field is often another JSON-encoded block list. The
//! [`Normalizer`] peels those layers up to a fixed depth, then reads the
//! innermost text with [`parse_search_text`].

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::search_result::{DEFAULT_SCORE_DECAY, SearchResponse, parse_search_text};

/// A typed content item as emitted by tool adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

impl From<ContentBlock> for Value {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => json!({ "type": "text", "text": text }),
            ContentBlock::Other => json!({ "type": "other" }),
        }
    }
}

/// Untyped provider output.
///
/// Blocks stay untyped: only the first one is inspected, and any mapping with
/// a string `text` key counts as text whatever its `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Text(String),
    Blocks(Vec<Value>),
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Vec<ContentBlock>> for RawPayload {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        Self::Blocks(blocks.into_iter().map(Value::from).collect())
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(blocks) => Self::Blocks(blocks),
            other => Self::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// How many JSON-encoded block lists may sit beneath the outer one.
    pub max_nesting: usize,
    pub score_decay: f64,
    pub clamp_scores: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_nesting: 1,
            score_decay: DEFAULT_SCORE_DECAY,
            clamp_scores: false,
        }
    }
}

#[derive(Clone)]
pub struct NormalizerBuilder {
    config: NormalizerConfig,
}

impl NormalizerBuilder {
    pub fn max_nesting(mut self, max_nesting: usize) -> Self {
        self.config.max_nesting = max_nesting;
        self
    }

    pub fn score_decay(mut self, score_decay: f64) -> Self {
        self.config.score_decay = score_decay;
        self
    }

    pub fn clamp_scores(mut self) -> Self {
        self.config.clamp_scores = true;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer::new(self.config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder {
            config: NormalizerConfig::default(),
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Extract structured results from `raw`. Never fails: malformed payloads
    /// degrade to partial or empty results.
    pub fn normalize(&self, query: &str, raw: impl Into<RawPayload>) -> SearchResponse {
        let Some(text) = self.terminal_text(raw.into()) else {
            tracing::warn!(query, "search payload carries no text block");
            return SearchResponse::empty(query);
        };

        let results = parse_search_text(&text, self.config.score_decay, self.config.clamp_scores);
        tracing::debug!(query, results = results.len(), "normalized search payload");
        SearchResponse::new(query, results)
    }

    /// Peel nested block lists until decoding fails, the first block has no
    /// string `text` key, or the nesting budget runs out. The last string obtained is the
    /// terminal text.
    fn terminal_text(&self, raw: RawPayload) -> Option<String> {
        let (mut current, mut remaining) = match raw {
            // A plain string may still be the serialized outer block list.
            RawPayload::Text(text) => (text, self.config.max_nesting + 1),
            RawPayload::Blocks(blocks) => (first_text(&blocks)?, self.config.max_nesting),
        };

        while remaining > 0 {
            let Some(inner) = decode_blocks(&current).and_then(|blocks| first_text(&blocks)) else {
                break;
            };
            current = inner;
            remaining -= 1;
        }

        Some(current)
    }
}

/// Normalize with the default configuration.
pub fn normalize(query: &str, raw: impl Into<RawPayload>) -> SearchResponse {
    Normalizer::default().normalize(query, raw)
}

// Only the list shape is required here, later blocks are never looked at.
fn decode_blocks(text: &str) -> Option<Vec<Value>> {
    serde_json::from_str(text).ok()
}

fn first_text(blocks: &[Value]) -> Option<String> {
    blocks.first()?.get("text")?.as_str().map(str::to_owned)
}
