use std::time::Duration;

use futures::future::BoxFuture;
use rig::completion::ToolDefinition;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::{normalizer::Normalizer, search_result::SearchResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend error: {0}")]
    BackendError(String),
    #[error("Search timed out after {0:?}")]
    Timeout(Duration),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A provider reachable through a tool adapter. Receives the argument object
/// and returns the provider's raw payload.
#[cfg_attr(test, mockall::automock)]
pub trait SearchBackend: Send + Sync {
    fn call(&self, arguments: Value) -> BoxFuture<'static, Result<Value, SearchError>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

/// Arguments of one web search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// Search query
    pub query: String,
    /// Number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// "basic" or "advanced"
    #[serde(default)]
    pub search_depth: SearchDepth,
    /// Include an AI-generated answer
    #[serde(default)]
    pub include_answer: bool,
    /// Restrict results to these domains
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_domains: Vec<String>,
    #[serde(default = "default_topic")]
    pub topic: String,
}

fn default_max_results() -> usize {
    5
}

fn default_topic() -> String {
    "general".to_owned()
}

impl SearchRequest {
    pub fn builder(query: impl Into<String>) -> SearchRequestBuilder {
        SearchRequestBuilder {
            request: SearchRequest {
                query: query.into(),
                max_results: default_max_results(),
                search_depth: SearchDepth::default(),
                include_answer: false,
                include_domains: Vec::new(),
                topic: default_topic(),
            },
        }
    }

    /// The provider argument object. Images and raw page content are never
    /// requested.
    pub fn to_arguments(&self) -> Value {
        let mut arguments = json!({
            "query": self.query,
            "max_results": self.max_results,
            "search_depth": self.search_depth,
            "include_images": false,
            "topic": self.topic,
            "include_answer": self.include_answer,
            "include_raw_content": false,
        });
        if !self.include_domains.is_empty() {
            arguments["include_domains"] = json!(self.include_domains);
        }
        arguments
    }

    /// Same request with a different query.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }
}

#[derive(Clone)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.request.max_results = max_results;
        self
    }

    pub fn search_depth(mut self, search_depth: SearchDepth) -> Self {
        self.request.search_depth = search_depth;
        self
    }

    pub fn include_answer(mut self) -> Self {
        self.request.include_answer = true;
        self
    }

    pub fn include_domain(mut self, domain: impl Into<String>) -> Self {
        self.request.include_domains.push(domain.into());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.request.topic = topic.into();
        self
    }

    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Web search tool: calls the backend and normalizes whatever comes back.
pub struct WebSearch<B> {
    backend: B,
    normalizer: Normalizer,
    timeout: Duration,
}

impl<B: SearchBackend> WebSearch<B> {
    pub const NAME: &'static str = "web_search";

    pub fn new(backend: B) -> Self {
        Self {
            backend,
            normalizer: Normalizer::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Tool definition handed to the rig agent.
    pub fn definition(&self) -> Result<ToolDefinition, SearchError> {
        Ok(ToolDefinition {
            name: Self::NAME.to_owned(),
            description: "Search the web for current information. Returns titles, urls and content snippets ranked by relevance.".to_owned(),
            parameters: serde_json::to_value(schemars::schema_for!(SearchRequest))?,
        })
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let raw = tokio::time::timeout(self.timeout, self.backend.call(request.to_arguments()))
            .await
            .map_err(|_| SearchError::Timeout(self.timeout))??;

        let response = self.normalizer.normalize(&request.query, raw);
        tracing::debug!(
            query = %request.query,
            results = response.total_results(),
            "web search completed"
        );
        Ok(response)
    }

    /// Run several queries one after another over the same backend, sharing
    /// every setting of `template` except the query.
    pub async fn search_many<I, S>(
        &self,
        queries: I,
        template: &SearchRequest,
    ) -> Vec<(String, Result<SearchResponse, SearchError>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut responses = Vec::new();
        for query in queries {
            let request = template.with_query(query);
            let response = self.search(&request).await;
            responses.push((request.query, response));
        }
        responses
    }

    /// Tool entry point: decode the agent's arguments and render the answer
    /// as JSON text. Failures become an `error` object so the agent always
    /// receives something to read.
    pub async fn call_tool(&self, arguments: Value) -> String {
        let result = match serde_json::from_value::<SearchRequest>(arguments) {
            Ok(request) => self.search(&request).await,
            Err(err) => Err(err.into()),
        };

        match result.and_then(|response| response.to_json().map_err(SearchError::from)) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "web search failed");
                json!({ "error": format!("Search failed: {err}") }).to_string()
            }
        }
    }
}
