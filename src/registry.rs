use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
    fmt::{Display, Formatter},
};

use petgraph::{algo::toposort, graph::DiGraph};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    requirement::{BlockReason, ToolConstraint},
    trace::Trace,
};

/// Error raised while assembling a [RequirementRegistry]. Always reported
/// before a run starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tool `{0}` is declared more than once")]
    DuplicateTool(String),
    #[error("Tool `{0}` has more than one constraint")]
    DuplicateConstraint(String),
    #[error("Constraint targets undeclared tool `{0}`")]
    UnknownTool(String),
    #[error("Constraint on `{tool}` references undeclared tool `{target}` in `{rule}`")]
    DanglingReference {
        tool: String,
        rule: &'static str,
        target: String,
    },
    #[error("Constraint on `{tool}` has min_invocations {min} > max_invocations {max}")]
    InvertedBounds { tool: String, min: usize, max: usize },
    #[error("Constraint on `{tool}` forces step 0, steps start at 1")]
    InvalidForcedStep { tool: String },
    #[error("Step {step} is forced for both `{first}` and `{second}`")]
    ConflictingForcedStep {
        step: usize,
        first: String,
        second: String,
    },
    #[error("`only_after` prerequisites form a cycle through `{tool}`")]
    PrerequisiteCycle { tool: String },
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Run-level failure surfaced to the agent loop so it can abort with a
/// diagnostic instead of looping.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("`{tool}` was forced at step {step} but the trace is {trace:?}")]
    ForcedStepMissed {
        tool: String,
        step: usize,
        trace: Vec<String>,
    },
    #[error(
        "No eligible tool at step {step}, trace: {trace:?}, blocked: [{}], unmet: [{}]",
        join(.blocked),
        join(.unsatisfied)
    )]
    Deadlock {
        step: usize,
        blocked: Vec<BlockedTool>,
        unsatisfied: Vec<UnmetRequirement>,
        trace: Vec<String>,
    },
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedTool {
    pub tool: String,
    pub reason: BlockReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmetRequirement {
    pub tool: String,
    pub required: usize,
    pub observed: usize,
}

/// Outcome of one decision step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Permitted tools, highest priority first.
    pub permitted: Vec<String>,
    pub blocked: Vec<BlockedTool>,
}

/// Serializable form of a requirement set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementsConfig {
    /// The agent's tools in declaration order.
    pub tools: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<ToolConstraint>,
}

#[derive(Clone, Default)]
pub struct RequirementRegistryBuilder {
    config: RequirementsConfig,
}

impl RequirementRegistryBuilder {
    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.config.tools.push(tool.into());
        self
    }

    pub fn tools<I, S>(self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tools
            .into_iter()
            .fold(self, |builder, tool| builder.tool(tool))
    }

    pub fn constraint(mut self, constraint: ToolConstraint) -> Self {
        self.config.constraints.push(constraint);
        self
    }

    pub fn build(self) -> Result<RequirementRegistry, ConfigError> {
        RequirementRegistry::from_config(self.config)
    }
}

/// A validated, immutable set of tool constraints keyed by tool name.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    tools: Vec<String>,
    constraints: HashMap<String, ToolConstraint>,
}

impl RequirementRegistry {
    pub fn builder() -> RequirementRegistryBuilder {
        RequirementRegistryBuilder::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_config(serde_json::from_str(json)?)
    }

    /// Validate `config` eagerly: duplicates, dangling references, inverted
    /// bounds, clashing forced steps and prerequisite cycles are rejected.
    pub fn from_config(config: RequirementsConfig) -> Result<Self, ConfigError> {
        let RequirementsConfig { tools, constraints } = config;

        let mut declared = HashSet::new();
        for tool in &tools {
            if !declared.insert(tool.as_str()) {
                return Err(ConfigError::DuplicateTool(tool.clone()));
            }
        }

        let mut by_tool: HashMap<String, ToolConstraint> = HashMap::new();
        let mut forced_steps: HashMap<usize, &str> = HashMap::new();
        for constraint in &constraints {
            let tool = constraint.tool.as_str();
            if !declared.contains(tool) {
                return Err(ConfigError::UnknownTool(tool.to_owned()));
            }
            if by_tool.contains_key(tool) {
                return Err(ConfigError::DuplicateConstraint(tool.to_owned()));
            }

            for (rule, target) in [
                ("only_after", &constraint.only_after),
                ("force_after", &constraint.force_after),
            ] {
                if let Some(target) = target {
                    if !declared.contains(target.as_str()) {
                        return Err(ConfigError::DanglingReference {
                            tool: tool.to_owned(),
                            rule,
                            target: target.clone(),
                        });
                    }
                }
            }

            if let (Some(min), Some(max)) = (constraint.min_invocations, constraint.max_invocations)
            {
                if min > max {
                    return Err(ConfigError::InvertedBounds {
                        tool: tool.to_owned(),
                        min,
                        max,
                    });
                }
            }

            if let Some(step) = constraint.force_at_step {
                if step == 0 {
                    return Err(ConfigError::InvalidForcedStep {
                        tool: tool.to_owned(),
                    });
                }
                if let Some(first) = forced_steps.insert(step, tool) {
                    return Err(ConfigError::ConflictingForcedStep {
                        step,
                        first: first.to_owned(),
                        second: tool.to_owned(),
                    });
                }
            }

            by_tool.insert(tool.to_owned(), constraint.clone());
        }

        check_prerequisite_cycles(&tools, &constraints)?;

        tracing::debug!(
            tools = tools.len(),
            constraints = by_tool.len(),
            "requirement registry validated"
        );

        Ok(Self {
            tools,
            constraints: by_tool,
        })
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn constraint(&self, tool: &str) -> Option<&ToolConstraint> {
        self.constraints.get(tool)
    }

    /// Evaluate every candidate against the trace.
    ///
    /// Fails only when a forced step has already been missed, which leaves
    /// the run permanently violated.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        trace: &Trace,
        candidates: &[S],
    ) -> Result<Evaluation, RunError> {
        self.check_forced_steps(trace)?;

        let step = trace.next_step();
        let mut seen = HashSet::new();
        let candidates = candidates
            .iter()
            .map(|candidate| AsRef::<str>::as_ref(candidate))
            .filter(|name| seen.insert(*name))
            .collect::<Vec<_>>();

        let forced_now = self
            .constraints
            .values()
            .find(|constraint| constraint.force_at_step == Some(step));

        // Forcing after a tool only binds when one of the forced tools can run.
        let forced_after = match (forced_now, trace.last_tool()) {
            (None, Some(last)) => self
                .tools
                .iter()
                .filter_map(|tool| self.constraints.get(tool))
                .filter(|constraint| constraint.force_after.as_deref() == Some(last))
                .filter(|constraint| candidates.contains(&constraint.tool.as_str()))
                .filter(|constraint| constraint.check(trace).is_ok())
                .map(|constraint| constraint.tool.clone())
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        };

        let mut evaluation = Evaluation::default();
        for name in &candidates {
            let verdict = if let Some(forced) = forced_now.filter(|forced| forced.tool != *name) {
                Err(BlockReason::NotForcedTool {
                    forced: forced.tool.clone(),
                    step,
                })
            } else if !forced_after.is_empty() && !forced_after.iter().any(|tool| tool == name) {
                Err(BlockReason::ForcedAfter {
                    forced: forced_after.clone(),
                    after: trace.last_tool().unwrap_or_default().to_owned(),
                })
            } else {
                self.constraints
                    .get(*name)
                    .map_or(Ok(()), |constraint| constraint.check(trace))
            };

            match verdict {
                Ok(()) => evaluation.permitted.push((*name).to_owned()),
                Err(reason) => evaluation.blocked.push(BlockedTool {
                    tool: (*name).to_owned(),
                    reason,
                }),
            }
        }

        if let Some(forced) = forced_now {
            if !candidates.contains(&forced.tool.as_str()) {
                evaluation.blocked.push(BlockedTool {
                    tool: forced.tool.clone(),
                    reason: BlockReason::NotCandidate,
                });
            }
        }

        evaluation
            .permitted
            .sort_by_key(|tool| (Reverse(self.priority(tool)), self.declaration_index(tool)));

        Ok(evaluation)
    }

    /// The subset of `candidates` that satisfies every constraint, highest
    /// priority first with ties in declaration order.
    ///
    /// An empty result while minimums are unmet is a deadlock and is reported
    /// as [RunError::Deadlock].
    pub fn permitted_tools<S: AsRef<str>>(
        &self,
        trace: &Trace,
        candidates: &[S],
    ) -> Result<Vec<String>, RunError> {
        let evaluation = self.evaluate(trace, candidates)?;
        if evaluation.permitted.is_empty() {
            let unsatisfied = self.unsatisfied(trace);
            if !unsatisfied.is_empty() {
                tracing::warn!(%trace, "no eligible tool while requirements are unmet");
                return Err(RunError::Deadlock {
                    step: trace.next_step(),
                    blocked: evaluation.blocked,
                    unsatisfied,
                    trace: trace.tool_names(),
                });
            }
        }

        tracing::debug!(
            step = trace.next_step(),
            permitted = ?evaluation.permitted,
            "evaluated tool requirements"
        );
        Ok(evaluation.permitted)
    }

    /// Whether every `min_invocations` is met by `trace`.
    pub fn is_satisfied(&self, trace: &Trace) -> bool {
        self.constraints
            .values()
            .all(|constraint| constraint.missing_invocations(trace) == 0)
    }

    /// Unmet minimums in declaration order.
    pub fn unsatisfied(&self, trace: &Trace) -> Vec<UnmetRequirement> {
        self.tools
            .iter()
            .filter_map(|tool| self.constraints.get(tool))
            .filter(|constraint| constraint.missing_invocations(trace) > 0)
            .map(|constraint| UnmetRequirement {
                tool: constraint.tool.clone(),
                required: constraint.min_invocations.unwrap_or_default(),
                observed: trace.count(&constraint.tool),
            })
            .collect()
    }

    /// Reports the first missed forced step in declaration order.
    fn check_forced_steps(&self, trace: &Trace) -> Result<(), RunError> {
        for constraint in self.tools.iter().filter_map(|tool| self.constraints.get(tool)) {
            let Some(step) = constraint.force_at_step else {
                continue;
            };
            if trace.len() >= step && trace.tool_at(step) != Some(constraint.tool.as_str()) {
                tracing::warn!(tool = %constraint.tool, step, %trace, "forced step missed");
                return Err(RunError::ForcedStepMissed {
                    tool: constraint.tool.clone(),
                    step,
                    trace: trace.tool_names(),
                });
            }
        }
        Ok(())
    }

    fn priority(&self, tool: &str) -> i32 {
        self.constraints
            .get(tool)
            .map_or(0, |constraint| constraint.priority)
    }

    /// Tools outside the registry sort after declared ones.
    fn declaration_index(&self, tool: &str) -> usize {
        self.tools
            .iter()
            .position(|declared| declared == tool)
            .unwrap_or(self.tools.len())
    }
}

fn check_prerequisite_cycles(
    tools: &[String],
    constraints: &[ToolConstraint],
) -> Result<(), ConfigError> {
    let mut graph = DiGraph::<&str, ()>::new();
    let nodes = tools
        .iter()
        .map(|tool| (tool.as_str(), graph.add_node(tool.as_str())))
        .collect::<HashMap<_, _>>();

    for constraint in constraints {
        if let Some(prerequisite) = &constraint.only_after {
            if let (Some(&from), Some(&to)) = (
                nodes.get(prerequisite.as_str()),
                nodes.get(constraint.tool.as_str()),
            ) {
                graph.add_edge(from, to, ());
            }
        }
    }

    toposort(&graph, None)
        .map(|_| ())
        .map_err(|cycle| ConfigError::PrerequisiteCycle {
            tool: graph[cycle.node_id()].to_owned(),
        })
}

impl Display for BlockedTool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tool, self.reason)
    }
}

impl Display for UnmetRequirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} needs {} invocation(s), has {}",
            self.tool, self.required, self.observed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(tools: &[&str], constraints: Vec<ToolConstraint>) -> RequirementRegistry {
        constraints
            .into_iter()
            .fold(
                RequirementRegistry::builder().tools(tools.iter().copied()),
                RequirementRegistryBuilder::constraint,
            )
            .build()
            .expect("valid registry")
    }

    fn trace_of(tools: &[&str]) -> Trace {
        let mut trace = Trace::new();
        for tool in tools {
            trace.record(*tool);
        }
        trace
    }

    #[test]
    fn forced_first_step_permits_only_that_tool() {
        let registry = registry(
            &["A", "B"],
            vec![ToolConstraint::builder("A").force_at_step(1).build()],
        );

        let permitted = registry
            .permitted_tools(&Trace::new(), &["A", "B"])
            .expect("no violation");
        assert_eq!(permitted, vec!["A"]);

        let evaluation = registry
            .evaluate(&Trace::new(), &["A", "B"])
            .expect("no violation");
        assert_eq!(
            evaluation.blocked,
            vec![BlockedTool {
                tool: "B".to_owned(),
                reason: BlockReason::NotForcedTool {
                    forced: "A".to_owned(),
                    step: 1
                }
            }]
        );
    }

    #[test]
    fn only_after_with_max_one() {
        let registry = registry(
            &["A", "B"],
            vec![
                ToolConstraint::builder("B")
                    .only_after("A")
                    .max_invocations(1)
                    .build(),
            ],
        );
        let mut trace = trace_of(&["A"]);

        let permitted = registry.permitted_tools(&trace, &["A", "B"]).expect("ok");
        assert!(permitted.contains(&"B".to_owned()));

        trace.record("B");
        let permitted = registry.permitted_tools(&trace, &["A", "B"]).expect("ok");
        assert_eq!(permitted, vec!["A"]);
    }

    #[test]
    fn consecutive_calls_blocked_until_another_tool_runs() {
        let registry = registry(
            &["C", "X"],
            vec![ToolConstraint::builder("C").consecutive_allowed(false).build()],
        );

        let permitted = registry
            .permitted_tools(&trace_of(&["X", "C"]), &["C", "X"])
            .expect("ok");
        assert_eq!(permitted, vec!["X"]);

        let permitted = registry
            .permitted_tools(&trace_of(&["X", "C", "X"]), &["C", "X"])
            .expect("ok");
        assert_eq!(permitted, vec!["C", "X"]);
    }

    #[test]
    fn orders_by_priority_then_declaration() {
        let registry = registry(
            &["think", "wiki", "web", "docs", "extra"],
            vec![
                ToolConstraint::builder("wiki").priority(10).build(),
                ToolConstraint::builder("web").priority(15).build(),
                ToolConstraint::builder("docs").priority(20).build(),
            ],
        );

        let permitted = registry
            .permitted_tools(
                &Trace::new(),
                &["unknown", "extra", "think", "wiki", "web", "docs"],
            )
            .expect("ok");
        assert_eq!(
            permitted,
            vec!["docs", "web", "wiki", "think", "extra", "unknown"]
        );
    }

    #[test]
    fn duplicate_candidates_are_reported_once() {
        let registry = registry(&["A"], vec![]);
        let permitted = registry
            .permitted_tools(&Trace::new(), &["A", "A"])
            .expect("ok");
        assert_eq!(permitted, vec!["A"]);
    }

    #[test]
    fn missed_forced_step_is_a_permanent_violation() {
        let registry = registry(
            &["A", "B"],
            vec![ToolConstraint::builder("A").force_at_step(1).build()],
        );

        let error = registry
            .permitted_tools(&trace_of(&["B"]), &["A", "B"])
            .expect_err("violated");
        assert!(matches!(
            error,
            RunError::ForcedStepMissed { ref tool, step: 1, ref trace } if tool == "A" && trace == &["B"]
        ));
    }

    #[test]
    fn several_missed_forced_steps_report_the_first_declared() {
        let tools = ["A", "B", "C", "D", "E", "F"];
        let registry = registry(
            &tools,
            tools
                .iter()
                .zip(1..)
                .map(|(tool, step)| ToolConstraint::builder(*tool).force_at_step(step).build())
                .collect(),
        );
        let trace = trace_of(&["F", "E", "D", "C", "B", "A"]);

        let error = registry
            .permitted_tools(&trace, &tools)
            .expect_err("violated");
        assert!(matches!(error, RunError::ForcedStepMissed { ref tool, .. } if tool == "A"));
    }

    #[test]
    fn empty_selection_with_unmet_minimum_is_a_deadlock() {
        let registry = registry(
            &["A", "B"],
            vec![
                ToolConstraint::builder("B")
                    .only_after("A")
                    .min_invocations(1)
                    .build(),
            ],
        );

        let error = registry
            .permitted_tools(&Trace::new(), &["B"])
            .expect_err("deadlock");
        let RunError::Deadlock {
            step,
            blocked,
            unsatisfied,
            trace,
        } = &error
        else {
            panic!("expected deadlock, got {error}");
        };
        assert_eq!(*step, 1);
        assert!(trace.is_empty());
        assert_eq!(blocked[0].tool, "B");
        assert_eq!(
            unsatisfied,
            &vec![UnmetRequirement {
                tool: "B".to_owned(),
                required: 1,
                observed: 0
            }]
        );
        assert!(error.to_string().contains("only allowed after `A`"));
    }

    #[test]
    fn empty_selection_when_satisfied_is_not_an_error() {
        let registry = registry(
            &["A"],
            vec![ToolConstraint::builder("A").max_invocations(1).build()],
        );
        let permitted = registry
            .permitted_tools(&trace_of(&["A"]), &["A"])
            .expect("satisfied run may stop");
        assert!(permitted.is_empty());
    }

    #[test]
    fn forced_tool_missing_from_candidates_deadlocks() {
        let registry = registry(
            &["A", "B"],
            vec![
                ToolConstraint::builder("A")
                    .force_at_step(1)
                    .min_invocations(1)
                    .build(),
            ],
        );

        let evaluation = registry.evaluate(&Trace::new(), &["B"]).expect("ok");
        assert!(evaluation.permitted.is_empty());
        assert!(evaluation.blocked.contains(&BlockedTool {
            tool: "A".to_owned(),
            reason: BlockReason::NotCandidate
        }));
        assert!(matches!(
            registry.permitted_tools(&Trace::new(), &["B"]),
            Err(RunError::Deadlock { .. })
        ));
    }

    #[test]
    fn force_after_narrows_the_next_step() {
        let registry = registry(
            &["triage", "respond", "think"],
            vec![
                ToolConstraint::builder("triage").force_at_step(1).build(),
                ToolConstraint::builder("respond")
                    .force_after("triage")
                    .max_invocations(1)
                    .build(),
            ],
        );
        let candidates = ["triage", "respond", "think"];

        let mut trace = trace_of(&["triage"]);
        assert_eq!(
            registry.permitted_tools(&trace, &candidates).expect("ok"),
            vec!["respond"]
        );

        trace.record("respond");
        assert_eq!(
            registry.permitted_tools(&trace, &candidates).expect("ok"),
            vec!["triage", "think"]
        );

        // Once `respond` is exhausted, following `triage` no longer forces it.
        trace.record("triage");
        assert_eq!(
            registry.permitted_tools(&trace, &candidates).expect("ok"),
            vec!["triage", "think"]
        );
    }

    #[test]
    fn satisfaction_ignores_call_order() {
        let registry = registry(
            &["A", "B"],
            vec![
                ToolConstraint::builder("A").min_invocations(2).build(),
                ToolConstraint::builder("B").min_invocations(1).build(),
            ],
        );

        assert!(!registry.is_satisfied(&trace_of(&["A", "B"])));
        assert!(registry.is_satisfied(&trace_of(&["A", "B", "A"])));
        assert!(registry.is_satisfied(&trace_of(&["B", "A", "A"])));
        assert!(registry.is_satisfied(&trace_of(&["A", "A", "B"])));
        assert_eq!(registry.unsatisfied(&trace_of(&["B"]))[0].tool, "A");
    }

    #[test]
    fn rejects_invalid_configurations() {
        let build = |tools: &[&str], constraints: Vec<ToolConstraint>| {
            constraints
                .into_iter()
                .fold(
                    RequirementRegistry::builder().tools(tools.iter().copied()),
                    RequirementRegistryBuilder::constraint,
                )
                .build()
        };

        assert!(matches!(
            build(&["A", "A"], vec![]),
            Err(ConfigError::DuplicateTool(tool)) if tool == "A"
        ));
        assert!(matches!(
            build(
                &["A"],
                vec![
                    ToolConstraint::builder("A").build(),
                    ToolConstraint::builder("A").priority(1).build()
                ]
            ),
            Err(ConfigError::DuplicateConstraint(tool)) if tool == "A"
        ));
        assert!(matches!(
            build(&["A"], vec![ToolConstraint::builder("Z").build()]),
            Err(ConfigError::UnknownTool(tool)) if tool == "Z"
        ));
        assert!(matches!(
            build(&["A"], vec![ToolConstraint::builder("A").only_after("Z").build()]),
            Err(ConfigError::DanglingReference { rule: "only_after", .. })
        ));
        assert!(matches!(
            build(&["A"], vec![ToolConstraint::builder("A").force_after("Z").build()]),
            Err(ConfigError::DanglingReference { rule: "force_after", .. })
        ));
        assert!(matches!(
            build(
                &["A"],
                vec![
                    ToolConstraint::builder("A")
                        .min_invocations(3)
                        .max_invocations(1)
                        .build()
                ]
            ),
            Err(ConfigError::InvertedBounds { min: 3, max: 1, .. })
        ));
        assert!(matches!(
            build(&["A"], vec![ToolConstraint::builder("A").force_at_step(0).build()]),
            Err(ConfigError::InvalidForcedStep { .. })
        ));
        assert!(matches!(
            build(
                &["A", "B"],
                vec![
                    ToolConstraint::builder("A").force_at_step(2).build(),
                    ToolConstraint::builder("B").force_at_step(2).build()
                ]
            ),
            Err(ConfigError::ConflictingForcedStep { step: 2, .. })
        ));
        assert!(matches!(
            build(
                &["A", "B"],
                vec![
                    ToolConstraint::builder("A").only_after("B").build(),
                    ToolConstraint::builder("B").only_after("A").build()
                ]
            ),
            Err(ConfigError::PrerequisiteCycle { .. })
        ));
        assert!(matches!(
            build(&["A"], vec![ToolConstraint::builder("A").only_after("A").build()]),
            Err(ConfigError::PrerequisiteCycle { tool }) if tool == "A"
        ));
    }

    #[test]
    fn loads_from_json() {
        let registry = RequirementRegistry::from_json(
            r#"{
                "tools": ["think", "search"],
                "constraints": [
                    {"tool": "think", "force_at_step": 1, "consecutive_allowed": false},
                    {"tool": "search", "only_after": "think", "min_invocations": 1, "max_invocations": 3}
                ]
            }"#,
        )
        .expect("valid json config");

        assert_eq!(registry.tools(), ["think", "search"]);
        assert_eq!(
            registry.constraint("search").and_then(|c| c.max_invocations),
            Some(3)
        );
        assert!(matches!(
            RequirementRegistry::from_json("{"),
            Err(ConfigError::JsonError(_))
        ));
    }
}
