use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::{
    registry::{Evaluation, RequirementRegistry, RunError, UnmetRequirement},
    trace::{ToolInvocationRecord, Trace},
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Run error: {0}")]
    RunError(#[from] RunError),
}

/// Requirement state of one agent run: the shared constraint set plus a
/// trace owned by this run alone.
#[derive(Debug, Clone)]
pub struct RequirementSession {
    id: String,
    registry: Arc<RequirementRegistry>,
    trace: Trace,
}

impl RequirementSession {
    pub fn new(registry: Arc<RequirementRegistry>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            registry,
            trace: Trace::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn registry(&self) -> &RequirementRegistry {
        &self.registry
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    /// Tools the agent may call next, see [RequirementRegistry::permitted_tools].
    pub fn permitted_tools<S: AsRef<str>>(
        &self,
        candidates: &[S],
    ) -> Result<Vec<String>, RunError> {
        self.registry.permitted_tools(&self.trace, candidates)
    }

    pub fn evaluate<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Evaluation, RunError> {
        self.registry.evaluate(&self.trace, candidates)
    }

    /// Record a completed tool call.
    pub fn record_invocation(&mut self, tool_name: impl Into<String>) -> &ToolInvocationRecord {
        let record = self.trace.record(tool_name);
        tracing::debug!(
            session = %self.id,
            tool = %record.tool_name,
            step = record.step_index,
            "tool invoked"
        );
        record
    }

    pub fn is_satisfied(&self) -> bool {
        self.registry.is_satisfied(&self.trace)
    }

    pub fn unsatisfied(&self) -> Vec<UnmetRequirement> {
        self.registry.unsatisfied(&self.trace)
    }
}

/// Independent requirement sessions keyed by session id, one per chat.
#[derive(Clone)]
pub struct SessionStore {
    registry: Arc<RequirementRegistry>,
    sessions: Arc<DashMap<String, RequirementSession>>,
}

impl SessionStore {
    pub fn new(registry: RequirementRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Open a fresh session and return its id.
    pub fn open(&self) -> String {
        let session = RequirementSession::new(Arc::clone(&self.registry));
        let id = session.id().to_owned();
        self.sessions.insert(id.clone(), session);
        tracing::info!(session = %id, "requirement session opened");
        id
    }

    /// Remove a session and hand back its final trace.
    pub fn close(&self, id: &str) -> Result<Trace, SessionError> {
        let (_, session) = self
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_owned()))?;
        tracing::info!(
            session = %id,
            steps = session.trace().len(),
            satisfied = session.is_satisfied(),
            "requirement session closed"
        );
        Ok(session.into_trace())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn permitted_tools<S: AsRef<str>>(
        &self,
        id: &str,
        candidates: &[S],
    ) -> Result<Vec<String>, SessionError> {
        let session = self
            .sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_owned()))?;
        Ok(session.permitted_tools(candidates)?)
    }

    /// Record a call and return the step it occupies.
    pub fn record_invocation(
        &self,
        id: &str,
        tool_name: impl Into<String>,
    ) -> Result<usize, SessionError> {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_owned()))?;
        Ok(session.record_invocation(tool_name).step_index)
    }

    pub fn is_satisfied(&self, id: &str) -> Result<bool, SessionError> {
        self.sessions
            .get(id)
            .map(|session| session.is_satisfied())
            .ok_or_else(|| SessionError::NotFound(id.to_owned()))
    }

    pub fn trace(&self, id: &str) -> Result<Trace, SessionError> {
        self.sessions
            .get(id)
            .map(|session| session.trace().clone())
            .ok_or_else(|| SessionError::NotFound(id.to_owned()))
    }
}
