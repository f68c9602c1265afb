use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.6;

/// One chunk returned by a vector store similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHit {
    pub content: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Similarity distance, lower is closer.
    pub score: f64,
}

/// Output of the internal document search tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalOutput {
    pub results: Vec<DocumentHit>,
}

impl RetrievalOutput {
    pub fn new(results: Vec<DocumentHit>) -> Self {
        Self { results }
    }

    /// Keep the `top_k` closest hits within `distance_threshold`, closest first.
    pub fn from_scored(
        hits: impl IntoIterator<Item = DocumentHit>,
        top_k: usize,
        distance_threshold: f64,
    ) -> Self {
        let mut results = hits
            .into_iter()
            .filter(|hit| hit.score <= distance_threshold)
            .collect::<Vec<_>>();
        results.sort_by(|a, b| a.score.total_cmp(&b.score));
        results.truncate(top_k);

        tracing::debug!(results = results.len(), "vector store search returned top results");
        Self { results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The JSON text handed back to the agent.
    pub fn text_content(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hit(content: &str, score: f64) -> DocumentHit {
        DocumentHit {
            content: content.to_owned(),
            metadata: Map::new(),
            score,
        }
    }

    #[test]
    fn keeps_closest_hits_within_threshold() {
        let output = RetrievalOutput::from_scored(
            vec![
                hit("far", 0.9),
                hit("c", 0.3),
                hit("a", 0.1),
                hit("edge", 0.6),
                hit("b", 0.2),
                hit("d", 0.4),
            ],
            DEFAULT_TOP_K,
            DEFAULT_DISTANCE_THRESHOLD,
        );

        let contents = output
            .results
            .iter()
            .map(|hit| hit.content.as_str())
            .collect::<Vec<_>>();
        assert_eq!(contents, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn renders_hits_as_json_text() {
        let mut metadata = Map::new();
        metadata.insert("document".to_owned(), json!("pilot-plan"));
        let output = RetrievalOutput::new(vec![DocumentHit {
            content: "Target market: college students".to_owned(),
            metadata,
            score: 0.25,
        }]);

        let text: Value =
            serde_json::from_str(&output.text_content().expect("json")).expect("json");
        assert_eq!(text[0]["metadata"]["document"], "pilot-plan");
        assert_eq!(text[0]["score"], 0.25);
        assert!(!output.is_empty());
        assert!(RetrievalOutput::default().is_empty());
    }
}
