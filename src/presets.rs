//! Requirement sets of the workshop agents.

use crate::{
    registry::{ConfigError, RequirementRegistry},
    requirement::ToolConstraint,
};

pub const THINK: &str = "think";
pub const WEB_SEARCH: &str = "web_search";
pub const WIKIPEDIA: &str = "wikipedia_tool";
pub const INTERNAL_DOCUMENT_SEARCH: &str = "internal_document_search";
pub const TICKET_TRIAGE: &str = "TicketTriageTool";
pub const TICKET_RESPONSE: &str = "TicketResponseTool";
pub const TICKET_TRIAGE_TOOL: &str = "ticket_triage_tool";
pub const TICKET_RESPONSE_TOOL: &str = "ticket_response_tool";

/// Conference prep agent.
///
/// Thinking comes first and never twice in a row. Every other tool waits for
/// it; internal documents outrank web search, which outranks Wikipedia. Web
/// search runs one to three times and internal documents at least once.
pub fn conference_prep() -> Result<RequirementRegistry, ConfigError> {
    RequirementRegistry::builder()
        .tools([THINK, WEB_SEARCH, WIKIPEDIA, INTERNAL_DOCUMENT_SEARCH])
        .constraint(
            ToolConstraint::builder(THINK)
                .consecutive_allowed(false)
                .force_at_step(1)
                .build(),
        )
        .constraint(
            ToolConstraint::builder(WIKIPEDIA)
                .only_after(THINK)
                .priority(10)
                .build(),
        )
        .constraint(
            ToolConstraint::builder(WEB_SEARCH)
                .only_after(THINK)
                .min_invocations(1)
                .max_invocations(3)
                .priority(15)
                .build(),
        )
        .constraint(
            ToolConstraint::builder(INTERNAL_DOCUMENT_SEARCH)
                .only_after(THINK)
                .min_invocations(1)
                .priority(20)
                .build(),
        )
        .build()
}

/// Company analysis agent: plan first, then pick freely between internal
/// documents and the web.
pub fn company_analysis() -> Result<RequirementRegistry, ConfigError> {
    RequirementRegistry::builder()
        .tools([THINK, INTERNAL_DOCUMENT_SEARCH, WEB_SEARCH])
        .constraint(ToolConstraint::builder(THINK).force_at_step(1).build())
        .build()
}

/// Ticket orchestrator: triage hand-off first, the response hand-off right
/// after it, each at least once.
pub fn ticket_orchestrator() -> Result<RequirementRegistry, ConfigError> {
    RequirementRegistry::builder()
        .tools([TICKET_TRIAGE, TICKET_RESPONSE])
        .constraint(
            ToolConstraint::builder(TICKET_TRIAGE)
                .force_at_step(1)
                .min_invocations(1)
                .build(),
        )
        .constraint(
            ToolConstraint::builder(TICKET_RESPONSE)
                .force_after(TICKET_TRIAGE)
                .min_invocations(1)
                .build(),
        )
        .build()
}

/// A specialist agent wrapping one remote tool that must run first.
pub fn single_tool_specialist(tool: &str) -> Result<RequirementRegistry, ConfigError> {
    RequirementRegistry::builder()
        .tool(tool)
        .constraint(ToolConstraint::builder(tool).force_at_step(1).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;

    #[test]
    fn presets_validate() {
        assert!(conference_prep().is_ok());
        assert!(company_analysis().is_ok());
        assert!(ticket_orchestrator().is_ok());
        assert!(single_tool_specialist(TICKET_TRIAGE_TOOL).is_ok());
        assert!(single_tool_specialist(TICKET_RESPONSE_TOOL).is_ok());
    }

    #[test]
    fn ticket_orchestrator_runs_triage_then_response() {
        let registry = ticket_orchestrator().expect("valid preset");
        let candidates = [TICKET_TRIAGE, TICKET_RESPONSE];
        let mut trace = Trace::new();

        assert_eq!(
            registry.permitted_tools(&trace, &candidates).expect("ok"),
            vec![TICKET_TRIAGE]
        );
        trace.record(TICKET_TRIAGE);
        assert_eq!(
            registry.permitted_tools(&trace, &candidates).expect("ok"),
            vec![TICKET_RESPONSE]
        );
        trace.record(TICKET_RESPONSE);
        assert!(registry.is_satisfied(&trace));
    }
}
