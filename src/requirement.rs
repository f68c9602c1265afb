use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::trace::Trace;

/// A declarative rule bound to one tool.
///
/// Rules are evaluated independently per tool and all of them must hold for
/// the tool to be permitted. `min_invocations` only gates termination and
/// `priority` only orders permitted tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConstraint {
    pub tool: String,
    /// 1-based step at which this tool is the only permitted tool.
    pub force_at_step: Option<usize>,
    /// The tool becomes the only permitted tool right after this one.
    pub force_after: Option<String>,
    /// The tool is permitted only once this one appears in the trace.
    pub only_after: Option<String>,
    pub consecutive_allowed: bool,
    pub min_invocations: Option<usize>,
    pub max_invocations: Option<usize>,
    pub priority: i32,
}

impl Default for ToolConstraint {
    fn default() -> Self {
        Self {
            tool: String::new(),
            force_at_step: None,
            force_after: None,
            only_after: None,
            consecutive_allowed: true,
            min_invocations: None,
            max_invocations: None,
            priority: 0,
        }
    }
}

impl ToolConstraint {
    pub fn builder(tool: impl Into<String>) -> ToolConstraintBuilder {
        ToolConstraintBuilder {
            constraint: ToolConstraint {
                tool: tool.into(),
                ..Default::default()
            },
        }
    }

    /// Check every permission rule that can be decided from this constraint
    /// alone. Step forcing across tools is resolved by the registry.
    pub(crate) fn check(&self, trace: &Trace) -> Result<(), BlockReason> {
        if let Some(prerequisite) = &self.only_after {
            if trace.count(prerequisite) == 0 {
                return Err(BlockReason::AwaitingPrerequisite {
                    only_after: prerequisite.clone(),
                });
            }
        }

        if !self.consecutive_allowed && trace.last_tool() == Some(self.tool.as_str()) {
            return Err(BlockReason::ConsecutiveCall);
        }

        if let Some(max) = self.max_invocations {
            if trace.count(&self.tool) >= max {
                return Err(BlockReason::MaxInvocationsReached { max });
            }
        }

        Ok(())
    }

    /// Invocations still needed before a run may terminate.
    pub fn missing_invocations(&self, trace: &Trace) -> usize {
        self.min_invocations
            .unwrap_or_default()
            .saturating_sub(trace.count(&self.tool))
    }
}

#[derive(Clone)]
pub struct ToolConstraintBuilder {
    constraint: ToolConstraint,
}

impl ToolConstraintBuilder {
    pub fn force_at_step(mut self, step: usize) -> Self {
        self.constraint.force_at_step = Some(step);
        self
    }

    pub fn force_after(mut self, tool: impl Into<String>) -> Self {
        self.constraint.force_after = Some(tool.into());
        self
    }

    pub fn only_after(mut self, tool: impl Into<String>) -> Self {
        self.constraint.only_after = Some(tool.into());
        self
    }

    pub fn consecutive_allowed(mut self, allowed: bool) -> Self {
        self.constraint.consecutive_allowed = allowed;
        self
    }

    pub fn min_invocations(mut self, min: usize) -> Self {
        self.constraint.min_invocations = Some(min);
        self
    }

    pub fn max_invocations(mut self, max: usize) -> Self {
        self.constraint.max_invocations = Some(max);
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.constraint.priority = priority;
        self
    }

    pub fn build(self) -> ToolConstraint {
        self.constraint
    }
}

/// Why a tool is not permitted at the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockReason {
    /// Another tool is forced at this step.
    NotForcedTool { forced: String, step: usize },
    /// Another tool is forced right after the previous call.
    ForcedAfter { forced: Vec<String>, after: String },
    AwaitingPrerequisite { only_after: String },
    ConsecutiveCall,
    MaxInvocationsReached { max: usize },
    /// The forced tool is missing from the caller's candidates.
    NotCandidate,
}

impl Display for BlockReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::NotForcedTool { forced, step } => {
                write!(f, "`{forced}` is forced at step {step}")
            }
            BlockReason::ForcedAfter { forced, after } => {
                write!(f, "{forced:?} must follow `{after}`")
            }
            BlockReason::AwaitingPrerequisite { only_after } => {
                write!(f, "only allowed after `{only_after}` has been called")
            }
            BlockReason::ConsecutiveCall => write!(f, "consecutive calls are not allowed"),
            BlockReason::MaxInvocationsReached { max } => {
                write!(f, "reached max invocations ({max})")
            }
            BlockReason::NotCandidate => write!(f, "not offered as a candidate"),
        }
    }
}
