use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const TITLE_MARKER: &str = "Title:";
const URL_MARKER: &str = "URL:";
const CONTENT_MARKER: &str = "Content:";

/// Positional score decay between two consecutive results.
pub const DEFAULT_SCORE_DECAY: f64 = 0.1;

/// One retrieved item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    /// Rank signal, higher is more relevant.
    pub score: f64,
}

/// Structured answer of one search call.
///
/// `total_results` always equals `results.len()`, which is why the fields are
/// only reachable through accessors. Deserializing a mismatched count fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SearchResponseFields")]
pub struct SearchResponse {
    query: String,
    results: Vec<SearchResult>,
    total_results: usize,
}

#[derive(Deserialize)]
struct SearchResponseFields {
    query: String,
    results: Vec<SearchResult>,
    total_results: usize,
}

impl TryFrom<SearchResponseFields> for SearchResponse {
    type Error = String;

    fn try_from(fields: SearchResponseFields) -> Result<Self, Self::Error> {
        if fields.total_results != fields.results.len() {
            return Err(format!(
                "total_results is {} but {} results are present",
                fields.total_results,
                fields.results.len()
            ));
        }
        Ok(Self::new(fields.query, fields.results))
    }
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        let total_results = results.len();
        Self {
            query: query.into(),
            results,
            total_results,
        }
    }

    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }

    /// Convert the response to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Parse a `Title:` / `URL:` / `Content:` text blob into scored results.
///
/// Scores follow `1.0 - decay * index` and are left unclamped unless
/// `clamp_scores` is set.
pub fn parse_search_text(text: &str, decay: f64, clamp_scores: bool) -> Vec<SearchResult> {
    let mut results = Vec::new();

    // The segment before the first marker precedes any result.
    for section in text.split(TITLE_MARKER).skip(1) {
        let mut lines = section.trim().lines();
        let title = lines.next().map(str::trim).unwrap_or_default();

        let mut url = "";
        let mut content = String::new();
        while let Some(line) = lines.next() {
            if let Some(rest) = line.strip_prefix(URL_MARKER) {
                url = rest.trim();
            } else if let Some(rest) = line.strip_prefix(CONTENT_MARKER) {
                content = std::iter::once(rest)
                    .chain(lines.by_ref())
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                break;
            }
        }

        if title.is_empty() || url.is_empty() {
            continue;
        }

        let mut score = 1.0 - decay * results.len() as f64;
        if clamp_scores {
            score = score.max(0.0);
        }
        results.push(SearchResult {
            title: title.to_owned(),
            url: url.to_owned(),
            content,
            score,
        });
    }

    results
}

/// Renders the response in the same `Title:` / `URL:` / `Content:` convention
/// that [`parse_search_text`] reads.
impl Display for SearchResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Query: {}", self.query)?;
        writeln!(f, "Total results: {}", self.total_results)?;
        for result in &self.results {
            write!(f, "\n{result}")?;
        }
        Ok(())
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{TITLE_MARKER} {}", self.title)?;
        writeln!(f, "{URL_MARKER} {}", self.url)?;
        writeln!(f, "Score: {:.2}", self.score)?;
        writeln!(f, "{CONTENT_MARKER} {}", self.content)
    }
}
