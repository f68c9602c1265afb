use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid incident date `{date}`, source: {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Billing,
    Technical,
    Complaint,
    Account,
    Feedback,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

/// Structured payload returned by the triage agent for a single ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TicketClassification {
    pub category: Vec<Category>,
    /// Full customer name; null if not mentioned.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Exact account identifier as it appears in the ticket.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Product/SKU referenced in the ticket.
    #[serde(default)]
    pub product: Option<String>,
    /// Concise plain-language summary of the problem.
    pub issue_summary: String,
    pub severity: Severity,
    pub sentiment: Sentiment,
    /// ISO-8601 date (YYYY-MM-DD) if provided.
    #[serde(default)]
    pub incident_date: Option<String>,
}

impl TicketClassification {
    /// JSON schema used as the agent's expected output.
    pub fn schema() -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(schemars::schema_for!(TicketClassification))
    }

    /// Parse the agent's answer, tolerating a fenced code block around it.
    pub fn from_agent_output(output: &str) -> Result<Self, TicketError> {
        let trimmed = output.trim();
        let body = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|rest| rest.trim_end().strip_suffix("```"))
            .unwrap_or(trimmed);

        let classification: Self = serde_json::from_str(body.trim())?;
        classification.incident_date()?;
        Ok(classification)
    }

    pub fn incident_date(&self) -> Result<Option<NaiveDate>, TicketError> {
        self.incident_date
            .as_deref()
            .map(|date| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| {
                    TicketError::InvalidDate {
                        date: date.to_owned(),
                        source,
                    }
                })
            })
            .transpose()
    }
}
