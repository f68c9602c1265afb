//! Conditional tool requirements and search result normalization for agents.
//!
//! Rigs-conditional sits between an agent loop and its tools. At a high
//! level, it provides a few major components:
//!
//! * A [constraint model][requirements] that decides which tools an agent may
//!   call at each step, and whether a run is allowed to stop.
//! * [Per-session state][sessions] so a server can drive many runs at once.
//! * A [result normalizer][normalizer] that turns nested provider payloads into
//!   structured search results.
//! * [Search tool plumbing][search]: request arguments, a pluggable backend and
//!   a rig tool definition.
//!
//! [requirements]: #declaring-tool-requirements
//! [sessions]: crate::session
//! [normalizer]: crate::normalizer
//! [search]: crate::search
//!
//! # A Tour of Rigs-conditional
//!
//! ## Declaring Tool Requirements
//!
//! A [`ToolConstraint`] binds rules to one tool: the step it is forced at, the
//! tool it has to wait for, whether it may repeat back to back, invocation
//! bounds and a priority. Constraints are collected in a
//! [`RequirementRegistry`], which validates them before any run starts.
//!
//! [`ToolConstraint`]: crate::requirement::ToolConstraint
//! [`RequirementRegistry`]: crate::registry::RequirementRegistry
//!
//! ### Example: Think First, Then Search
//!
//! ```rust
//! use rigs_conditional::registry::RequirementRegistry;
//! use rigs_conditional::requirement::ToolConstraint;
//! use rigs_conditional::trace::Trace;
//!
//! let registry = RequirementRegistry::builder()
//!     .tools(["think", "web_search"])
//!     .constraint(ToolConstraint::builder("think").force_at_step(1).build())
//!     .constraint(
//!         ToolConstraint::builder("web_search")
//!             .only_after("think")
//!             .min_invocations(1)
//!             .build(),
//!     )
//!     .build()?;
//!
//! let mut trace = Trace::new();
//! assert_eq!(registry.permitted_tools(&trace, &["think", "web_search"])?, vec!["think"]);
//!
//! trace.record("think");
//! trace.record("web_search");
//! assert!(registry.is_satisfied(&trace));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Normalizing Search Results
//!
//! ```rust
//! use rigs_conditional::normalizer::normalize;
//!
//! let response = normalize(
//!     "rust",
//!     "Title: Rust\nURL: https://rust-lang.org\nContent: A language",
//! );
//! assert_eq!(response.total_results(), 1);
//! assert_eq!(response.results()[0].score, 1.0);
//! ```

pub mod normalizer;
pub mod presets;
pub mod registry;
pub mod requirement;
pub mod retrieval;
pub mod search;
pub mod search_result;
pub mod session;
pub mod ticket;
pub mod trace;

pub use rig;
