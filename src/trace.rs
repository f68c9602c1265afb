use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One observed tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocationRecord {
    pub tool_name: String,
    /// 1-based position in the trace.
    pub step_index: usize,
    pub invoked_at: DateTime<Local>,
}

/// The ordered history of tool invocations within one run.
///
/// Append-only: records are never reordered or removed, so step indices stay
/// strictly increasing. A deserialized trace must number its records 1, 2, 3...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraceRecords")]
pub struct Trace {
    records: Vec<ToolInvocationRecord>,
}

#[derive(Deserialize)]
struct TraceRecords {
    records: Vec<ToolInvocationRecord>,
}

impl TryFrom<TraceRecords> for Trace {
    type Error = String;

    fn try_from(TraceRecords { records }: TraceRecords) -> Result<Self, Self::Error> {
        for (position, record) in records.iter().enumerate() {
            if record.step_index != position + 1 {
                return Err(format!(
                    "record `{}` has step {} at position {}",
                    record.tool_name,
                    record.step_index,
                    position + 1
                ));
            }
        }
        Ok(Self { records })
    }
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for `tool_name` at the next step.
    pub fn record(&mut self, tool_name: impl Into<String>) -> &ToolInvocationRecord {
        let step_index = self.records.len() + 1;
        self.records.push(ToolInvocationRecord {
            tool_name: tool_name.into(),
            step_index,
            invoked_at: Local::now(),
        });
        &self.records[step_index - 1]
    }

    pub fn records(&self) -> &[ToolInvocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The step the next invocation would occupy.
    pub fn next_step(&self) -> usize {
        self.records.len() + 1
    }

    pub fn last_tool(&self) -> Option<&str> {
        self.records.last().map(|record| record.tool_name.as_str())
    }

    /// Name of the tool recorded at a 1-based step.
    pub fn tool_at(&self, step: usize) -> Option<&str> {
        step.checked_sub(1)
            .and_then(|index| self.records.get(index))
            .map(|record| record.tool_name.as_str())
    }

    pub fn count(&self, tool_name: &str) -> usize {
        self.records
            .iter()
            .filter(|record| record.tool_name == tool_name)
            .count()
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.tool_name.clone())
            .collect()
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .records
            .iter()
            .map(|record| record.tool_name.as_str())
            .collect::<Vec<_>>();
        write!(f, "[{}]", names.join(" -> "))
    }
}
